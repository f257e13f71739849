//! Combat events
//!
//! Все события transient: живут в пределах одного тика и потребляются один раз.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::MatchResult;
use crate::components::Side;

/// Event: projectile hit the `target` craft.
///
/// Пишется в `advance_projectiles`, потребляется `apply_hits` в том же тике.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEvent {
    pub target: Side,
}

/// Event: audio cue for the presentation layer.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Fire,
    Hit,
}

/// Event: the match reached a terminal result on this tick.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEnded {
    pub result: MatchResult,
}
