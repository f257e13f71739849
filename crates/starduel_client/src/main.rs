use std::process::ExitCode;
use std::time::Duration;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use starduel_simulation::{
    init_logger, log_error, log_info, run_simulation_tick, LoopPhase, MatchConfig, StarduelPlugin,
};

mod assets;
mod audio;
mod hud;
mod input;
mod logger;
mod rendering;

use assets::GameAssets;
use audio::AudioCuePlugin;
use hud::HudPlugin;
use input::KeyboardInputPlugin;
use logger::ClientLogPlugin;
use rendering::{RenderingSyncPlugin, ARENA_Z};

/// Сколько времени FixedUpdate догоняет после зависания кадра
/// (по умолчанию Bevy режет delta до 250 ms, и тики теряются)
const MAX_CATCH_UP: Duration = Duration::from_secs(60);

fn main() -> ExitCode {
    init_logger();

    let config = MatchConfig::default();
    if let Err(err) = config.validate() {
        log_error(&format!("Invalid match config: {}", err));
        return ExitCode::FAILURE;
    }

    // Все файлы проверяем до открытия окна: отсутствие любого фатально
    if let Err(err) = assets::verify_assets(&assets::asset_root()) {
        log_error(&format!("Cannot start: {}", err));
        return ExitCode::FAILURE;
    }

    let window_size = (config.arena.width as f32, config.arena.height as f32);
    let tick_rate = f64::from(config.tick_rate_hz);

    let exit = App::new()
        // Bevy defaults (rendering, input, audio, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Battlestar Galactica".to_string(),
                resolution: WindowResolution::new(window_size.0, window_size.1),
                resizable: false,
                ..default()
            }),
            // Закрытие окна идёт через InputEdge::Quit
            close_when_requested: false,
            ..default()
        }))
        .add_plugins(ClientLogPlugin)
        // Simulation: SimulationTick из FixedUpdate
        .insert_resource(Time::<Fixed>::from_hz(tick_rate))
        .add_plugins(StarduelPlugin::new(config))
        .add_systems(FixedUpdate, run_simulation_tick)
        // Keyboard → HeldControls / InputEdge
        .add_plugins(KeyboardInputPlugin)
        // Simulation → visuals
        .init_resource::<GameAssets>()
        .add_plugins((RenderingSyncPlugin, HudPlugin, AudioCuePlugin))
        .add_systems(Startup, (raise_virtual_max_delta, setup_scene))
        .add_systems(Update, exit_when_stopped)
        .run();

    match exit {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(_) => ExitCode::FAILURE,
    }
}

/// Camera, background and the divider
fn setup_scene(mut commands: Commands, assets: Res<GameAssets>, config: Res<MatchConfig>) {
    commands.spawn(Camera2d);

    let arena = Vec2::new(config.arena.width as f32, config.arena.height as f32);
    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(arena),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, ARENA_Z),
    ));

    let divider = config.divider();
    commands.spawn((
        Sprite {
            color: Color::BLACK,
            custom_size: Some(rendering::box_size(&divider)),
            ..default()
        },
        Transform::from_translation(rendering::box_center(&divider, &config).extend(ARENA_Z + 1.0)),
    ));
}

/// Stopped → AppExit
fn exit_when_stopped(
    phase: Res<LoopPhase>,
    mut exit: EventWriter<AppExit>,
    mut sent: Local<bool>,
) {
    if *sent || !phase.is_stopped() {
        return;
    }

    log_info(&format!("Loop stopped: {:?}", phase.result()));
    exit.write(AppExit::Success);
    *sent = true;
}

/// Virtual clock max delta → `MAX_CATCH_UP`
fn raise_virtual_max_delta(mut time: ResMut<Time<Virtual>>) {
    time.set_max_delta(MAX_CATCH_UP);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_virtual_clock_catches_up_long_stalls() {
        let mut world = World::new();
        world.insert_resource(Time::<Virtual>::default());
        assert_eq!(
            world.resource::<Time<Virtual>>().max_delta(),
            Duration::from_millis(250)
        );

        world
            .run_system_once(raise_virtual_max_delta)
            .expect("system runs");

        // Двухсекундный stall при 60 Hz: все 120 тиков должны пройти
        let max_delta = world.resource::<Time<Virtual>>().max_delta();
        assert_eq!(max_delta, MAX_CATCH_UP);
        assert!(max_delta >= Duration::from_secs(2));
    }
}
