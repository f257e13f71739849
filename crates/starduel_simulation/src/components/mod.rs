//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - craft: корабли игроков (Side, Craft, Health, Magazine)
//! - projectile: пули в полёте (Projectile, Heading)

pub mod craft;
pub mod projectile;

// Re-exports для удобного импорта
pub use craft::*;
pub use projectile::*;
