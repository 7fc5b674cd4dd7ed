//! Keyboard sampling for flight controls.

use bevy::prelude::*;

use super::components::ShipInput;

/// Read this frame's controls into `ShipInput`.
///
/// Arrows or WASD steer, Space fires once per press.
pub fn read_ship_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<ShipInput>) {
    let held = |keys: [KeyCode; 2]| keyboard.any_pressed(keys);

    *input = ShipInput {
        up: held([KeyCode::ArrowUp, KeyCode::KeyW]),
        down: held([KeyCode::ArrowDown, KeyCode::KeyS]),
        left: held([KeyCode::ArrowLeft, KeyCode::KeyA]),
        right: held([KeyCode::ArrowRight, KeyCode::KeyD]),
        fire: keyboard.just_pressed(KeyCode::Space),
    };
}
