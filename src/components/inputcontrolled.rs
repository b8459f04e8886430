//! Input-controlled movement components.
//!
//! This module provides marker components that describe how an entity
//! responds to input:
//! - [`InputControlled`] – arrow keys nudge the entity and the camera together
//! - [`MouseControlled`] – holding the primary button centers the entity on the cursor
//!
//! Systems in [`crate::systems::keyboardcontroller`] and
//! [`crate::systems::mousecontroller`] read these components to update
//! entity positions.

use bevy_ecs::prelude::Component;

/// Keyboard-driven movement.
///
/// Each held arrow key moves the entity by one pixel on its axis per frame.
/// The camera moves by the same amount.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct InputControlled;

/// Movement controlled by the pointer.
///
/// While the primary button is held the entity is placed so that its center
/// sits under the cursor. This replaces any keyboard movement from the same
/// frame.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MouseControlled;
