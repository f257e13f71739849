//! Пули в полёте

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Travel direction along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Rightward,
    Leftward,
}

impl Heading {
    pub fn sign(self) -> i32 {
        match self {
            Heading::Rightward => 1,
            Heading::Leftward => -1,
        }
    }
}

/// Projectile fired by a craft.
///
/// Owner фиксируется при spawn и больше не меняется. `serial` даёт
/// стабильный порядок для snapshot и рендера.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub owner: Side,
    pub heading: Heading,
    pub serial: u64,
}

impl Projectile {
    pub fn new(owner: Side, serial: u64) -> Self {
        Self {
            owner,
            heading: owner.heading(),
            serial,
        }
    }

    /// The craft this projectile can hit.
    pub fn target(&self) -> Side {
        self.owner.opponent()
    }
}

/// Монотонный счётчик для `Projectile::serial`
#[derive(Resource, Debug, Default)]
pub struct ProjectileSerial(pub u64);

impl ProjectileSerial {
    pub fn next(&mut self) -> u64 {
        let serial = self.0;
        self.0 += 1;
        serial
    }
}
