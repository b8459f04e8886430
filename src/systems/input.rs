//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. Every
//! other system reads that snapshot instead of touching Raylib.
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::resources::input::InputState;

/// Poll Raylib for keyboard and mouse state and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);

    input.direction_up.active = is_key_down(input.direction_up.key_binding);
    input.direction_down.active = is_key_down(input.direction_down.key_binding);
    input.direction_left.active = is_key_down(input.direction_left.key_binding);
    input.direction_right.active = is_key_down(input.direction_right.key_binding);

    let mouse = rl.get_mouse_position();
    input.pointer.primary = rl.is_mouse_button_down(input.pointer.button_binding);
    input.pointer.x = mouse.x;
    input.pointer.y = mouse.y;
}
