//! LogPrinter поверх Bevy `tracing` макросов
//!
//! До сборки App (проверка конфига и assets) работает `ConsoleLogger`
//! симуляции; после `LogPlugin` логи уходят в его subscriber.

use bevy::log::{debug, error, info, warn};
use bevy::prelude::*;
use starduel_simulation::{set_log_level, set_logger, LogLevel, LogPrinter};

/// Forwards simulation log lines to Bevy's `LogPlugin` subscriber.
pub struct ClientLogger;

impl LogPrinter for ClientLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!("{}", message),
            LogLevel::Info => info!("{}", message),
            LogLevel::Warning => warn!("{}", message),
            LogLevel::Error => error!("{}", message),
        }
    }
}

/// Must be added after `DefaultPlugins` (LogPlugin ставит subscriber в build).
pub struct ClientLogPlugin;

impl Plugin for ClientLogPlugin {
    fn build(&self, _app: &mut App) {
        set_logger(Box::new(ClientLogger));
        // Фильтрацию уровней делает LogPlugin
        set_log_level(LogLevel::Debug);
    }
}
