//! Loop phase: Running → Terminating → Stopped (one-shot, no resume).

use bevy::prelude::*;

use crate::combat::MatchResult;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    #[default]
    Running,
    /// Симуляция заморожена, баннер результата на экране
    Terminating {
        result: MatchResult,
        hold_ticks_remaining: u32,
    },
    /// `result` is `None` when the players quit before the match ended.
    Stopped { result: Option<MatchResult> },
}

impl LoopPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopPhase::Running)
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, LoopPhase::Stopped { .. })
    }

    pub fn result(&self) -> Option<MatchResult> {
        match *self {
            LoopPhase::Running => None,
            LoopPhase::Terminating { result, .. } => Some(result),
            LoopPhase::Stopped { result } => result,
        }
    }
}

/// Run condition: simulation steps only advance while the match is live.
pub fn simulation_running(phase: Res<LoopPhase>) -> bool {
    phase.is_running()
}

/// System: отсчёт удержания баннера, затем `Stopped`
pub fn tick_result_hold(mut phase: ResMut<LoopPhase>) {
    let LoopPhase::Terminating {
        result,
        hold_ticks_remaining,
    } = *phase
    else {
        return;
    };

    let remaining = hold_ticks_remaining.saturating_sub(1);
    *phase = if remaining == 0 {
        crate::logger::log_info("Result hold elapsed, stopping");
        LoopPhase::Stopped {
            result: Some(result),
        }
    } else {
        LoopPhase::Terminating {
            result,
            hold_ticks_remaining: remaining,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_phase_result() {
        assert_eq!(LoopPhase::Running.result(), None);
        assert_eq!(
            LoopPhase::Terminating {
                result: MatchResult::Tie,
                hold_ticks_remaining: 3
            }
            .result(),
            Some(MatchResult::Tie)
        );
        assert_eq!(LoopPhase::Stopped { result: None }.result(), None);
    }

    #[test]
    fn test_hold_counts_down_to_stopped() {
        let mut world = World::new();
        world.insert_resource(LoopPhase::Terminating {
            result: MatchResult::LeftWins,
            hold_ticks_remaining: 2,
        });

        world.run_system_once(tick_result_hold).expect("system runs");
        assert_eq!(
            *world.resource::<LoopPhase>(),
            LoopPhase::Terminating {
                result: MatchResult::LeftWins,
                hold_ticks_remaining: 1
            }
        );

        world.run_system_once(tick_result_hold).expect("system runs");
        assert_eq!(
            *world.resource::<LoopPhase>(),
            LoopPhase::Stopped {
                result: Some(MatchResult::LeftWins)
            }
        );
    }

    #[test]
    fn test_hold_ignores_running_phase() {
        let mut world = World::new();
        world.insert_resource(LoopPhase::Running);

        world.run_system_once(tick_result_hold).expect("system runs");
        assert_eq!(*world.resource::<LoopPhase>(), LoopPhase::Running);
    }
}
