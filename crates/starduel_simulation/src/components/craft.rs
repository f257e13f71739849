//! Корабли игроков: Side, Craft, Health, Magazine

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Heading;

/// Which half of the arena a craft belongs to.
///
/// LEFT is the yellow craft, RIGHT the red one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Projectiles always fly away from their owner, towards the opponent.
    pub fn heading(self) -> Heading {
        match self {
            Side::Left => Heading::Rightward,
            Side::Right => Heading::Leftward,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Side::Left => "Yellow",
            Side::Right => "Red",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Player craft. Exactly one per side.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Craft {
    pub side: Side,
}

/// Здоровье корабля
///
/// Только уменьшается. Может уйти ниже нуля, если несколько попаданий
/// пришли в одном тике.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
}

impl Health {
    pub fn new(current: i32) -> Self {
        Self { current }
    }

    pub fn take_hit(&mut self) {
        self.current -= 1;
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

/// Max concurrently in-flight projectiles for a craft.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magazine {
    pub capacity: usize,
}

impl Magazine {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn can_fire(&self, in_flight: usize) -> bool {
        in_flight < self.capacity
    }
}
