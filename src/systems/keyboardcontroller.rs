//! Arrow-key controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! nudges every [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! entity together with the camera. Diagonals are not normalized: each held
//! key contributes a full unit on its own axis.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::inputcontrolled::InputControlled;
use crate::components::screenposition::ScreenPosition;
use crate::resources::camera2d::OrthoCamera;
use crate::resources::input::InputState;

/// Apply this frame's held directions to controlled entities and the camera.
pub fn keyboard_controller(
    mut query: Query<&mut ScreenPosition, With<InputControlled>>,
    mut camera: ResMut<OrthoCamera>,
    input: Res<InputState>,
) {
    if !input.any_direction() {
        return;
    }
    let step = input.direction();

    for mut position in query.iter_mut() {
        position.translate(step.x, step.y);
        trace!("Keyboard moved sprite to ({}, {})", position.pos.x, position.pos.y);
    }
    camera.translate(step.x, step.y);
}
