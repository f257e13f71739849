//! Input state and edge events

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Keys held by one player during this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

impl ControlState {
    pub const IDLE: ControlState = ControlState {
        up: false,
        down: false,
        left: false,
        right: false,
        sprint: false,
    };
}

/// Level-sampled key state for both players, refreshed every tick.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldControls {
    pub left: ControlState,
    pub right: ControlState,
}

impl HeldControls {
    pub fn get(&self, side: Side) -> ControlState {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, state: ControlState) {
        match side {
            Side::Left => self.left = state,
            Side::Right => self.right = state,
        }
    }
}

/// Event: discrete key-down (one per physical press, never repeated while held).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEdge {
    Fire(Side),
    Quit,
}
