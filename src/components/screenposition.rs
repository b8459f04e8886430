//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores an entity's position in screen
//! pixels with the origin at the bottom-left corner of the viewport and y
//! pointing up. Entities with it ignore the camera.
//!
//! For world-space entities, see
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space position of an entity's bottom-left corner.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vector2,
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Create a ScreenPosition from an existing Vector2.
    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }

    /// Move by `(dx, dy)` pixels.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }

    /// Set the entire position.
    pub fn set_pos(&mut self, pos: Vector2) {
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        let p = ScreenPosition::default();
        assert_eq!(p.pos.x, 0.0);
        assert_eq!(p.pos.y, 0.0);
    }

    #[test]
    fn test_translate_accumulates() {
        let mut p = ScreenPosition::new(10.0, 20.0);
        p.translate(-1.0, 0.0);
        p.translate(0.0, 1.0);
        assert_eq!(p.pos.x, 9.0);
        assert_eq!(p.pos.y, 21.0);
    }

    #[test]
    fn test_set_pos_replaces() {
        let mut p = ScreenPosition::from_vec(Vector2 { x: 1.0, y: 2.0 });
        p.set_pos(Vector2 { x: 50.0, y: 60.0 });
        assert_eq!(p.pos.x, 50.0);
        assert_eq!(p.pos.y, 60.0);
    }
}
