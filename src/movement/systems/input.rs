//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::KeyK, KeyCode::KeyW];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let down = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
    let y = if down { -1.0 } else { 0.0 };

    input.axis = Vec2::new(x, y);
    input.down_held = down;
    input.jump_just_pressed = keyboard.any_just_pressed(JUMP_KEYS);
    input.jump_held = keyboard.any_pressed(JUMP_KEYS);
}
