//! Keyboard → HeldControls + InputEdge
//!
//! Сэмплируем в PreUpdate, до `RunFixedMainLoop`: тики этого кадра видят
//! актуальные клавиши.

use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;
use starduel_simulation::{ControlState, HeldControls, InputEdge, Side};

pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .add_systems(PreUpdate, sample_keyboard.after(InputSystem));
    }
}

/// Keys of one player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerKeys {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub sprint: KeyCode,
    pub fire: KeyCode,
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: PlayerKeys,
    pub right: PlayerKeys,
    pub quit: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: PlayerKeys {
                up: KeyCode::KeyW,
                down: KeyCode::KeyS,
                left: KeyCode::KeyA,
                right: KeyCode::KeyD,
                sprint: KeyCode::ShiftLeft,
                fire: KeyCode::ControlLeft,
            },
            right: PlayerKeys {
                up: KeyCode::ArrowUp,
                down: KeyCode::ArrowDown,
                left: KeyCode::ArrowLeft,
                right: KeyCode::ArrowRight,
                sprint: KeyCode::ShiftRight,
                fire: KeyCode::ControlRight,
            },
            quit: KeyCode::Escape,
        }
    }
}

impl KeyBindings {
    pub fn for_side(&self, side: Side) -> &PlayerKeys {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Level-sampled state of one player's movement keys
pub fn held_state(keys: &ButtonInput<KeyCode>, bindings: &PlayerKeys) -> ControlState {
    ControlState {
        up: keys.pressed(bindings.up),
        down: keys.pressed(bindings.down),
        left: keys.pressed(bindings.left),
        right: keys.pressed(bindings.right),
        sprint: keys.pressed(bindings.sprint),
    }
}

/// Edges of this frame, in a fixed order (fire LEFT, fire RIGHT, quit)
pub fn frame_edges(keys: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> Vec<InputEdge> {
    let mut edges = Vec::new();
    for side in Side::BOTH {
        if keys.just_pressed(bindings.for_side(side).fire) {
            edges.push(InputEdge::Fire(side));
        }
    }
    if keys.just_pressed(bindings.quit) {
        edges.push(InputEdge::Quit);
    }
    edges
}

fn sample_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut held: ResMut<HeldControls>,
    mut edges: EventWriter<InputEdge>,
    mut close_requests: EventReader<WindowCloseRequested>,
) {
    for side in Side::BOTH {
        held.set(side, held_state(&keys, bindings.for_side(side)));
    }

    let mut frame = frame_edges(&keys, &bindings);
    if close_requests.read().count() > 0 && !frame.contains(&InputEdge::Quit) {
        frame.push(InputEdge::Quit);
    }
    edges.write_batch(frame);
}
