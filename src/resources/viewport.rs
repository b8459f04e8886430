//! Viewport resource.
//!
//! Tracks the window's drawable dimensions in pixels. Updated from raylib at
//! the top of every frame so layout math follows window resizes.
//!
//! Game state uses a bottom-left origin with y pointing up, while raylib and
//! the mouse report positions with a top-left origin and y pointing down. The
//! helpers here are the only place that conversion is written down.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current viewport size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Viewport {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Center of the viewport in pixels.
    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.w as f32 / 2.0,
            y: self.h as f32 / 2.0,
        }
    }

    /// Center of the viewport snapped to whole pixels.
    ///
    /// Odd sizes round down, so `801x481` gives `(400, 240)`.
    pub fn pixel_center(&self) -> Vector2 {
        Vector2 {
            x: (self.w / 2) as f32,
            y: (self.h / 2) as f32,
        }
    }

    /// Bottom-left corner that centers a `width` x `height` box on
    /// [`Self::pixel_center`].
    pub fn centered(&self, width: f32, height: f32) -> Vector2 {
        let center = self.pixel_center();
        Vector2 {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
        }
    }

    /// Convert a top-left-origin window position (mouse) to y-up space.
    pub fn window_to_surface(&self, window_pos: Vector2) -> Vector2 {
        Vector2 {
            x: window_pos.x,
            y: self.h as f32 - window_pos.y,
        }
    }

    /// Top edge in raylib space of a box whose bottom-left corner sits at
    /// `y` in y-up space.
    pub fn surface_to_window_top(&self, y: f32, height: f32) -> f32 {
        self.h as f32 - y - height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let vp = Viewport::new(800, 480);
        let c = vp.center();
        assert_eq!(c.x, 400.0);
        assert_eq!(c.y, 240.0);
    }

    #[test]
    fn test_centered_box() {
        let vp = Viewport::new(800, 480);
        let pos = vp.centered(100.0, 60.0);
        assert_eq!(pos.x, 350.0);
        assert_eq!(pos.y, 210.0);
    }

    #[test]
    fn test_pixel_center_rounds_odd_sizes_down() {
        let vp = Viewport::new(801, 481);
        let c = vp.pixel_center();
        assert_eq!(c.x, 400.0);
        assert_eq!(c.y, 240.0);
        // The float center keeps the half pixel.
        assert_eq!(vp.center().x, 400.5);
    }

    #[test]
    fn test_centered_box_in_odd_viewport() {
        let vp = Viewport::new(801, 481);
        let pos = vp.centered(100.0, 60.0);
        assert_eq!(pos.x, 350.0);
        assert_eq!(pos.y, 210.0);
    }

    #[test]
    fn test_window_to_surface_flips_y() {
        let vp = Viewport::new(640, 360);
        let p = vp.window_to_surface(Vector2 { x: 10.0, y: 0.0 });
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 360.0);

        let p = vp.window_to_surface(Vector2 { x: 10.0, y: 360.0 });
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_surface_to_window_top() {
        let vp = Viewport::new(640, 360);
        // A 40px tall box resting on the bottom edge starts 320px from the top.
        assert_eq!(vp.surface_to_window_top(0.0, 40.0), 320.0);
        // A box touching the top edge starts at 0.
        assert_eq!(vp.surface_to_window_top(320.0, 40.0), 0.0);
    }
}
