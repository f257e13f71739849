//! Movement domain: перемещение кораблей по зажатым клавишам
//!
//! Каждый тик оба корабля обрабатываются независимо. Шаг, который вывел бы
//! корабль за пределы его половины арены, отбрасывается целиком (не обрезается).

use std::ops::RangeInclusive;

use bevy::prelude::*;

use crate::components::{Craft, Side};
use crate::config::{ClampPolicy, MatchConfig};
use crate::geometry::{BoundingBox, Point};
use crate::input::{ControlState, HeldControls};


/// One guarded step along an axis. `direction` is -1 or +1.
pub fn step_axis(
    position: i32,
    direction: i32,
    sprint: bool,
    range: &RangeInclusive<i32>,
    config: &MatchConfig,
) -> i32 {
    let base = direction * config.craft_speed;
    let bonus = if sprint { direction * config.sprint_bonus } else { 0 };

    let guarded = match config.clamp_policy {
        ClampPolicy::Strict => base + bonus,
        ClampPolicy::BaseOnly => base,
    };

    if range.contains(&(position + guarded)) {
        position + base + bonus
    } else {
        position
    }
}

/// New top-left corner of `side`'s craft after one tick of `controls`.
///
/// Directions are applied in a fixed order (left, right, up, down), each
/// guarded against the position left by the previous one.
pub fn resolve_movement(
    origin: Point,
    controls: ControlState,
    side: Side,
    config: &MatchConfig,
) -> Point {
    let xs = config.permitted_x(side);
    let ys = config.permitted_y();
    let sprint = controls.sprint;

    let mut next = origin;
    if controls.left {
        next.x = step_axis(next.x, -1, sprint, &xs, config);
    }
    if controls.right {
        next.x = step_axis(next.x, 1, sprint, &xs, config);
    }
    if controls.up {
        next.y = step_axis(next.y, -1, sprint, &ys, config);
    }
    if controls.down {
        next.y = step_axis(next.y, 1, sprint, &ys, config);
    }
    next
}

/// System: движение обоих кораблей по `HeldControls`
pub fn move_crafts(
    held: Res<HeldControls>,
    config: Res<MatchConfig>,
    mut crafts: Query<(&Craft, &mut BoundingBox)>,
) {
    for (craft, mut bounds) in crafts.iter_mut() {
        let controls = held.get(craft.side);
        if controls == ControlState::IDLE {
            continue;
        }

        let next = resolve_movement(bounds.origin(), controls, craft.side, &config);
        if next != bounds.origin() {
            bounds.x = next.x;
            bounds.y = next.y;
        }
    }
}
