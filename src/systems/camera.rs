//! Camera update system.
//!
//! Rebuilds [`OrthoCamera::combined`] once per frame after every controller
//! has moved the camera and before the render pass reads it.
use bevy_ecs::prelude::*;

use crate::resources::camera2d::OrthoCamera;

pub fn update_camera(mut camera: ResMut<OrthoCamera>) {
    camera.update();
}
