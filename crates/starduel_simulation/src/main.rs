//! Headless матч Starduel
//!
//! Прогоняет записанную дуэль в реальном времени (60 Hz) без окна:
//! оба корабля маневрируют и стреляют, результат пишется в лог.
//! Уровень логов: `STARDUEL_LOG=debug`.

use starduel_simulation::game_loop::LogPresentation;
use starduel_simulation::{
    ControlState, GameLoop, InputFrame, MatchConfig, ScriptedInput, Side,
};

/// Скрипт дуэли: LEFT стоит и стреляет, RIGHT уходит вверх-вниз и отвечает
fn duel_script() -> Vec<InputFrame> {
    let mut frames = Vec::new();

    for tick in 0..1_800u32 {
        let dodge = ControlState {
            up: (tick / 90) % 2 == 0,
            down: (tick / 90) % 2 == 1,
            sprint: tick % 3 == 0,
            ..ControlState::IDLE
        };

        let mut frame = InputFrame::idle().holding(Side::Right, dodge);
        if tick % 20 == 0 {
            frame = frame.fire(Side::Left);
        }
        if tick % 45 == 0 {
            frame = frame.fire(Side::Right);
        }
        frames.push(frame);
    }

    frames
}

fn main() {
    let config = MatchConfig::default();

    let mut game = match GameLoop::realtime(config, LogPresentation::default()) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Invalid match config: {}", err);
            std::process::exit(1);
        }
    };

    // Лента кончилась раньше конца матча → Quit
    let mut input = ScriptedInput::new(duel_script());
    let summary = game.run(&mut input);

    println!(
        "Simulation complete after {} ticks: {:?} (health {} / {})",
        summary.ticks, summary.result, summary.left_health, summary.right_health
    );
}
