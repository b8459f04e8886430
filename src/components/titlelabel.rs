use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::resources::viewport::Viewport;

#[derive(Component, Clone, Debug)]
/// Static title text with its layout measured once at creation.
pub struct TitleLabel {
    /// The text to render.
    pub text: String,
    /// Font key in the [`FontStore`](crate::resources::assetstore::FontStore).
    pub font: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Extra spacing between glyphs in pixels.
    pub spacing: f32,
    /// Measured width of `text`.
    pub width: f32,
    /// Measured height of `text`.
    pub height: f32,
}

impl TitleLabel {
    /// Creates a label from already measured text.
    pub fn new(
        text: impl Into<String>,
        font: impl Into<String>,
        font_size: f32,
        spacing: f32,
        size: Vector2,
    ) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            font_size,
            spacing,
            width: size.x,
            height: size.y,
        }
    }

    /// Top-left corner of the label in y-up screen space.
    ///
    /// Horizontally centered in the viewport, with the label's bottom edge
    /// resting on the top edge of an image of `image_height` centered in the
    /// viewport. The viewport center and the image half height are whole
    /// pixels, rounded down.
    pub fn position(&self, viewport: &Viewport, image_height: f32) -> Vector2 {
        let center = viewport.pixel_center();
        Vector2 {
            x: center.x - self.width / 2.0,
            y: center.y + self.height + (image_height as i32 / 2) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(width: f32, height: f32) -> TitleLabel {
        TitleLabel::new("GatorQuest", "title", 32.0, 1.0, Vector2 { x: width, y: height })
    }

    #[test]
    fn test_new_keeps_measured_size() {
        let l = label(180.0, 32.0);
        assert_eq!(l.width, 180.0);
        assert_eq!(l.height, 32.0);
        assert_eq!(l.text, "GatorQuest");
        assert_eq!(l.font, "title");
    }

    #[test]
    fn test_position_sits_above_centered_image() {
        let l = label(180.0, 32.0);
        let p = l.position(&Viewport::new(800, 480), 200.0);
        assert_eq!(p.x, 310.0);
        assert_eq!(p.y, 240.0 + 32.0 + 100.0);
    }

    #[test]
    fn test_horizontal_centering_holds_for_any_width() {
        let l = label(123.0, 20.0);
        for w in [1, 2, 99, 320, 641, 800, 1920, 3841] {
            let p = l.position(&Viewport::new(w, 480), 50.0);
            assert_eq!(p.x, (w / 2) as f32 - 123.0 / 2.0);
        }
    }

    #[test]
    fn test_position_rounds_odd_viewport_and_image_down() {
        let l = label(180.0, 32.0);
        let p = l.position(&Viewport::new(801, 481), 201.0);
        assert_eq!(p.x, 310.0);
        assert_eq!(p.y, 240.0 + 32.0 + 100.0);
    }
}
