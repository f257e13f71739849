//! Match tuning (arena, craft, projectiles, timing).
//!
//! Все константы матча живут в одном `Resource`. Значения по умолчанию
//! совпадают с классической версией игры (900×500, 60 Hz, 10 HP, 3 пули).

use std::ops::RangeInclusive;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Side;
use crate::geometry::{BoundingBox, Extent, Point};

/// How the movement guard treats the sprint bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClampPolicy {
    /// Guard the full base + sprint step. Craft never leave their region.
    #[default]
    Strict,
    /// Guard only the base step, then apply base + sprint together.
    /// A sprinting craft may end up to `sprint_bonus` units past its bound.
    BaseOnly,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub arena: Extent,
    /// Ширина статичной вертикальной перегородки в центре арены
    pub divider_width: i32,
    /// Насколько craft может заходить за середину арены
    pub overlap_margin: i32,
    pub craft_size: Extent,
    pub projectile_size: Extent,
    /// Base velocity, units per tick
    pub craft_speed: i32,
    /// Extra units per tick while the sprint key is held
    pub sprint_bonus: i32,
    pub projectile_speed: i32,
    /// Max projectiles in flight per craft
    pub ammo_capacity: usize,
    pub starting_health: i32,
    pub tick_rate_hz: u32,
    pub result_hold_ms: u64,
    pub left_spawn: Point,
    pub right_spawn: Point,
    /// Projectile y = craft.y + craft.height / 2 - muzzle_offset
    pub muzzle_offset: i32,
    pub clamp_policy: ClampPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena: Extent::new(900, 500),
            divider_width: 10,
            overlap_margin: 10,
            craft_size: Extent::new(55, 40),
            projectile_size: Extent::new(10, 5),
            craft_speed: 5,
            sprint_bonus: 1,
            projectile_speed: 10,
            ammo_capacity: 3,
            starting_health: 10,
            tick_rate_hz: 60,
            result_hold_ms: 5_000,
            left_spawn: Point::new(100, 300),
            right_spawn: Point::new(700, 300),
            muzzle_offset: 2,
            clamp_policy: ClampPolicy::Strict,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: i64 },

    #[error("ammo capacity must be at least 1")]
    NoAmmo,

    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,

    #[error("{side:?} craft has no room to move: x range {min}..={max}")]
    EmptyRegion { side: Side, min: i32, max: i32 },

    #[error("{side:?} spawn ({x}, {y}) is outside its permitted region")]
    SpawnOutOfBounds { side: Side, x: i32, y: i32 },
}

impl MatchConfig {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    pub fn result_hold(&self) -> Duration {
        Duration::from_millis(self.result_hold_ms)
    }

    /// Result banner hold, in whole ticks (5 s at 60 Hz = 300).
    ///
    /// Saturates at `u32::MAX` for absurdly long holds.
    pub fn result_hold_ticks(&self) -> u32 {
        let ticks = self
            .result_hold_ms
            .saturating_mul(u64::from(self.tick_rate_hz))
            .saturating_add(500)
            / 1000;
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    pub fn midpoint(&self) -> i32 {
        self.arena.width / 2
    }

    /// Static divider rectangle, centred on the midpoint.
    pub fn divider(&self) -> BoundingBox {
        BoundingBox::new(
            self.midpoint() - self.divider_width / 2,
            0,
            self.divider_width,
            self.arena.height,
        )
    }

    /// Allowed x of a craft's top-left corner (inclusive).
    pub fn permitted_x(&self, side: Side) -> RangeInclusive<i32> {
        match side {
            Side::Left => 0..=self.midpoint() + self.overlap_margin - self.craft_size.width,
            Side::Right => {
                self.midpoint() - self.overlap_margin..=self.arena.width - self.craft_size.width
            }
        }
    }

    /// Allowed y of a craft's top-left corner (inclusive), same for both sides.
    pub fn permitted_y(&self) -> RangeInclusive<i32> {
        0..=self.arena.height - self.craft_size.height
    }

    pub fn spawn(&self, side: Side) -> Point {
        match side {
            Side::Left => self.left_spawn,
            Side::Right => self.right_spawn,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena.width", self.arena.width),
            ("arena.height", self.arena.height),
            ("craft_size.width", self.craft_size.width),
            ("craft_size.height", self.craft_size.height),
            ("projectile_size.width", self.projectile_size.width),
            ("projectile_size.height", self.projectile_size.height),
            ("craft_speed", self.craft_speed),
            ("projectile_speed", self.projectile_speed),
            ("starting_health", self.starting_health),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NonPositive {
                    field,
                    value: value as i64,
                });
            }
        }
        if self.sprint_bonus < 0 {
            return Err(ConfigError::NonPositive {
                field: "sprint_bonus",
                value: self.sprint_bonus as i64,
            });
        }
        if self.ammo_capacity == 0 {
            return Err(ConfigError::NoAmmo);
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        for side in Side::BOTH {
            let xs = self.permitted_x(side);
            if xs.is_empty() || self.permitted_y().is_empty() {
                return Err(ConfigError::EmptyRegion {
                    side,
                    min: *xs.start(),
                    max: *xs.end(),
                });
            }

            let spawn = self.spawn(side);
            if !xs.contains(&spawn.x) || !self.permitted_y().contains(&spawn.y) {
                return Err(ConfigError::SpawnOutOfBounds {
                    side,
                    x: spawn.x,
                    y: spawn.y,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_regions() {
        let config = MatchConfig::default();

        assert_eq!(config.permitted_x(Side::Left), 0..=405);
        assert_eq!(config.permitted_x(Side::Right), 440..=845);
        assert_eq!(config.permitted_y(), 0..=460);
        assert_eq!(config.divider(), BoundingBox::new(445, 0, 10, 500));
    }

    #[test]
    fn test_tick_timing() {
        let config = MatchConfig::default();

        assert_eq!(config.tick_duration(), Duration::from_secs(1) / 60);
        assert_eq!(config.result_hold(), Duration::from_secs(5));
        assert_eq!(config.result_hold_ticks(), 300);
    }

    #[test]
    fn test_huge_result_hold_saturates() {
        let config = MatchConfig {
            result_hold_ms: u64::MAX / 2,
            ..default()
        };

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.result_hold_ticks(), u32::MAX);
    }

    #[test]
    fn test_rejects_zero_ammo() {
        let config = MatchConfig {
            ammo_capacity: 0,
            ..default()
        };

        assert_eq!(config.validate(), Err(ConfigError::NoAmmo));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = MatchConfig {
            craft_speed: -5,
            ..default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "craft_speed",
                value: -5
            })
        );
    }

    #[test]
    fn test_rejects_spawn_across_divider() {
        let config = MatchConfig {
            left_spawn: Point::new(600, 300),
            ..default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnOutOfBounds {
                side: Side::Left,
                x: 600,
                y: 300
            })
        );
    }

    #[test]
    fn test_partial_config_from_json_uses_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{ "ammo_capacity": 5, "clamp_policy": "BaseOnly" }"#)
                .expect("valid json");

        assert_eq!(config.ammo_capacity, 5);
        assert_eq!(config.clamp_policy, ClampPolicy::BaseOnly);
        assert_eq!(config.arena, Extent::new(900, 500));
    }
}
