//! Determinism test
//!
//! Одинаковая лента input → идентичные кадры, звуки и итог матча.

use starduel_simulation::*;

/// Лента: оба игрока маневрируют со sprint и стреляют с разной частотой
fn duel_tape(len: u32) -> Vec<InputFrame> {
    (0..len)
        .map(|tick| {
            let left = ControlState {
                up: tick % 120 < 60,
                down: tick % 120 >= 60,
                right: tick % 50 < 10,
                sprint: tick % 4 == 0,
                ..ControlState::IDLE
            };
            let right = ControlState {
                down: tick % 90 < 45,
                up: tick % 90 >= 45,
                left: tick % 70 < 20,
                sprint: tick % 3 == 0,
                ..ControlState::IDLE
            };

            let mut frame = InputFrame::idle()
                .holding(Side::Left, left)
                .holding(Side::Right, right);
            if tick % 17 == 0 {
                frame = frame.fire(Side::Left);
            }
            if tick % 23 == 5 {
                frame = frame.fire(Side::Right);
            }
            frame
        })
        .collect()
}

struct RunRecord {
    summary: MatchSummary,
    frames: Vec<FrameSnapshot>,
    sounds: Vec<SoundCue>,
}

fn record_run(tape: &[InputFrame]) -> RunRecord {
    let mut game = GameLoop::new(
        MatchConfig::default(),
        RecordingPresentation::default(),
        Unpaced,
    )
    .expect("valid config");

    let mut frames = Vec::new();
    for frame in tape {
        if game.tick(frame.clone()).is_stopped() {
            break;
        }
        frames.push(game.snapshot());
    }

    RunRecord {
        summary: game.summary(),
        frames,
        sounds: game.presentation().sounds.clone(),
    }
}

/// Test: 3 прогона одной ленты дают одинаковую историю
#[test]
fn test_identical_tapes_identical_runs() {
    let tape = duel_tape(1_500);

    let first = record_run(&tape);
    for _ in 0..2 {
        let again = record_run(&tape);
        assert_eq!(again.summary, first.summary);
        assert_eq!(again.frames, first.frames);
        assert_eq!(again.sounds, first.sounds);
    }

    assert!(first.sounds.contains(&SoundCue::Fire));
}

/// Test: кадры сериализуются одинаково (для replay / сравнения между машинами)
#[test]
fn test_snapshots_serialize_identically() {
    let tape = duel_tape(400);

    let a = record_run(&tape);
    let b = record_run(&tape);

    let json_a = serde_json::to_string(&a.frames).expect("serialize");
    let json_b = serde_json::to_string(&b.frames).expect("serialize");
    assert_eq!(json_a, json_b);
}

/// Test: инварианты держатся на протяжении всего матча
#[test]
fn test_invariants_hold_every_tick() {
    let config = MatchConfig::default();
    let record = record_run(&duel_tape(1_500));

    for frame in &record.frames {
        for craft in &frame.crafts {
            let region_x = config.permitted_x(craft.side);
            assert!(region_x.contains(&craft.bounds.x), "tick {}: {:?}", frame.tick, craft);
            assert!(config.permitted_y().contains(&craft.bounds.y));
            assert!(craft.in_flight <= config.ammo_capacity);
            assert!(craft.health <= config.starting_health);
        }

        for projectile in &frame.projectiles {
            assert!(projectile.bounds.x < config.arena.width);
            assert!(projectile.bounds.right() > 0);
        }
    }
}
