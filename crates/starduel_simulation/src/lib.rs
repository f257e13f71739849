//! Starduel Simulation Core
//!
//! Два корабля, арена 900×500, пули и здоровье. Вся игровая логика
//! это ECS на Bevy 0.16 без рендера; окно, спрайты и звук живут в клиенте
//! и получают состояние через `Presentation` / ECS queries.
//!
//! Тик (60 Hz): input edges → движение → пули → попадания → конец матча.

use bevy::prelude::*;

// Публичные модули
pub mod combat;
pub mod components;
pub mod config;
pub mod game_loop;
pub mod geometry;
pub mod input;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use combat::{HitEvent, MatchEnded, MatchResult, SoundCue};
pub use components::*;
pub use config::{ClampPolicy, ConfigError, MatchConfig};
pub use game_loop::{
    run_simulation_tick, FramePacer, FrameSnapshot, GameLoop, LoopPhase, MatchSummary,
    Presentation, RecordingPresentation, SimulationTick, StarduelPlugin, TickPacer, Unpaced,
};
pub use geometry::{intersects, BoundingBox, Extent, Point};
pub use input::{ControlState, HeldControls, InputEdge, InputFrame, InputSource, ScriptedInput};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger,
    set_logger_if_needed, LogLevel, LogPrinter, LOGGER_LEVEL,
};

/// Создаёт minimal Bevy App для headless симуляции
///
/// Main schedule не используется: тики идут через `SimulationTick`.
pub fn create_headless_app(config: MatchConfig) -> App {
    init_logger();

    let mut app = App::new();
    app.add_plugins(StarduelPlugin::new(config));
    app
}
