//! Game-over detection.

use bevy::prelude::*;

use crate::combat::MatchEnded;
use crate::components::{Craft, Health, Side};
use crate::config::MatchConfig;
use crate::game_loop::LoopPhase;

/// Match result, recomputed from health every tick (never stored as truth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    Ongoing,
    LeftWins,
    RightWins,
    Tie,
}

impl MatchResult {
    /// Tie проверяется первым: одновременный ноль это ничья, а не двойное поражение.
    /// Затем поражение RIGHT, затем LEFT.
    pub fn evaluate(left_health: i32, right_health: i32) -> Self {
        if left_health + right_health == 0 {
            MatchResult::Tie
        } else if right_health <= 0 {
            MatchResult::LeftWins
        } else if left_health <= 0 {
            MatchResult::RightWins
        } else {
            MatchResult::Ongoing
        }
    }

    pub fn is_terminal(self) -> bool {
        self != MatchResult::Ongoing
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            MatchResult::LeftWins => Some(Side::Left),
            MatchResult::RightWins => Some(Side::Right),
            MatchResult::Ongoing | MatchResult::Tie => None,
        }
    }

    pub fn banner_text(self) -> Option<String> {
        match self {
            MatchResult::Ongoing => None,
            MatchResult::Tie => Some("It's a tie!".to_string()),
            MatchResult::LeftWins | MatchResult::RightWins => self
                .winner()
                .map(|side| format!("{} wins!", side.display_name())),
        }
    }
}

/// System: проверка конца матча после drain попаданий
///
/// Terminal result → `MatchEnded` + фаза `Terminating` с удержанием баннера.
pub fn detect_game_over(
    crafts: Query<(&Craft, &Health)>,
    config: Res<MatchConfig>,
    mut phase: ResMut<LoopPhase>,
    mut ended: EventWriter<MatchEnded>,
) {
    let mut health = [config.starting_health; 2];
    for (craft, craft_health) in crafts.iter() {
        health[craft.side.index()] = craft_health.current;
    }

    let result = MatchResult::evaluate(health[Side::Left.index()], health[Side::Right.index()]);
    if !result.is_terminal() {
        return;
    }

    crate::logger::log_info(&format!(
        "🏁 Match over: {:?} (HP left={}, right={})",
        result,
        health[Side::Left.index()],
        health[Side::Right.index()]
    ));

    *phase = LoopPhase::Terminating {
        result,
        hold_ticks_remaining: config.result_hold_ticks(),
    };
    ended.write(MatchEnded { result });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ongoing_while_both_alive() {
        assert_eq!(MatchResult::evaluate(10, 10), MatchResult::Ongoing);
        assert_eq!(MatchResult::evaluate(1, 7), MatchResult::Ongoing);
    }

    #[test]
    fn test_simultaneous_zero_is_tie() {
        assert_eq!(MatchResult::evaluate(0, 0), MatchResult::Tie);
    }

    #[test]
    fn test_zero_sum_is_tie() {
        // Сумма == 0 проверяется до индивидуальных поражений
        assert_eq!(MatchResult::evaluate(-1, 1), MatchResult::Tie);
    }

    #[test]
    fn test_single_loss() {
        assert_eq!(MatchResult::evaluate(5, 0), MatchResult::LeftWins);
        assert_eq!(MatchResult::evaluate(0, 5), MatchResult::RightWins);
        assert_eq!(MatchResult::evaluate(3, -2), MatchResult::LeftWins);
    }

    #[test]
    fn test_both_depleted_non_zero_sum_favours_left() {
        // RIGHT проверяется раньше LEFT
        assert_eq!(MatchResult::evaluate(0, -1), MatchResult::LeftWins);
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(MatchResult::Ongoing.banner_text(), None);
        assert_eq!(MatchResult::Tie.banner_text().as_deref(), Some("It's a tie!"));
        assert_eq!(
            MatchResult::LeftWins.banner_text().as_deref(),
            Some("Yellow wins!")
        );
        assert_eq!(
            MatchResult::RightWins.banner_text().as_deref(),
            Some("Red wins!")
        );
    }
}
