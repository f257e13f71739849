//! Combat system module
//!
//! Поток данных за тик:
//! - fire: `InputEdge::Fire` → spawn Projectile (если есть патроны) → `SoundCue::Fire`
//! - projectile: сдвиг пуль → коллизия с кораблём противника → `HitEvent`
//! - hits: drain `HitEvent` → Health -1 → `SoundCue::Hit`
//! - outcome: `MatchResult` из текущего Health → `MatchEnded`
//!
//! Health меняется ТОЛЬКО в `apply_hits`, коллизии его не трогают.

use bevy::prelude::*;

pub mod events;
pub mod fire;
pub mod hits;
pub mod outcome;
pub mod projectile;

#[cfg(test)]
mod projectile_tests;

// Re-export основных типов
pub use events::{HitEvent, MatchEnded, SoundCue};
pub use fire::{in_flight_count, muzzle_box, try_fire};
pub use hits::apply_hits;
pub use outcome::{detect_game_over, MatchResult};
pub use projectile::{advance_projectile, advance_projectiles, ProjectileFate};

/// Регистрация combat событий
pub(crate) fn register_events(app: &mut App) {
    app.add_event::<HitEvent>()
        .add_event::<SoundCue>()
        .add_event::<MatchEnded>();
}
