//! Orthographic 2D camera resource.
//!
//! Holds the camera translation in y-up world units and the derived raylib
//! [`Camera2D`] used by the render pass. Controller systems move the camera
//! with [`OrthoCamera::translate`]; [`update_camera`] then rebuilds the
//! combined transform before anything is drawn with it.
//!
//! raylib's 2D mode is y-down, so `combined` is built over a y-flipped world:
//! a world point `(x, y)` is handed to raylib as `(x, -y)`.
//!
//! [`update_camera`]: crate::systems::camera::update_camera

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active camera.
#[derive(Resource, Clone, Copy)]
pub struct OrthoCamera {
    /// World point shown at the center of the viewport.
    pub position: Vector2,
    /// Viewport width the camera was created for.
    pub viewport_width: f32,
    /// Viewport height the camera was created for.
    pub viewport_height: f32,
    /// View transform derived from `position`. Stale until [`Self::update`] runs.
    pub combined: Camera2D,
}

impl OrthoCamera {
    /// Camera sized to the viewport, looking at the world origin.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            viewport_width,
            viewport_height,
            combined: Camera2D {
                target: Vector2 { x: 0.0, y: 0.0 },
                offset: Vector2 { x: 0.0, y: 0.0 },
                rotation: 0.0,
                zoom: 1.0,
            },
        };
        camera.update();
        camera
    }

    /// Move the camera by `(dx, dy)` world units.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Recompute the combined transform from the current position.
    pub fn update(&mut self) {
        self.combined = Camera2D {
            target: Vector2 {
                x: self.position.x,
                y: -self.position.y,
            },
            offset: Vector2 {
                x: self.viewport_width / 2.0,
                y: self.viewport_height / 2.0,
            },
            rotation: 0.0,
            zoom: 1.0,
        };
    }

    /// Project a y-up world point into top-left-origin window space using
    /// the last computed transform.
    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        let cam = &self.combined;
        Vector2 {
            x: (world.x - cam.target.x) * cam.zoom + cam.offset.x,
            y: (-world.y - cam.target.y) * cam.zoom + cam.offset.y,
        }
    }

    /// Top-left corner in raylib's flipped world of a box whose bottom-left
    /// corner is `world` and whose height is `height`.
    pub fn flipped_origin(world: Vector2, height: f32) -> Vector2 {
        Vector2 {
            x: world.x,
            y: -(world.y + height),
        }
    }
}
