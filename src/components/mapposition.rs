//! World-space position component.
//!
//! [`MapPosition`] places an entity in the camera's world, bottom-left corner
//! first, y pointing up. Entities with it pan when the camera moves.
//!
//! For screen-fixed entities, see
//! [`ScreenPosition`](super::screenposition::ScreenPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
