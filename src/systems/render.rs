//! Frame rendering.
//!
//! The frame is planned first by [`compose_frame`], which only reads ECS data
//! and returns the draw calls in submission order. [`render_system`] then
//! clears the screen and replays that list through Raylib inside a single
//! drawing scope.
//!
//! Order is fixed: the background through the camera, the movable sprite in
//! screen space, then the title on top.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::titlelabel::TitleLabel;
use crate::resources::assetstore::{FontStore, TextureStore};
use crate::resources::camera2d::OrthoCamera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::viewport::Viewport;

/// One planned draw, in y-up coordinates.
#[derive(Debug, Clone)]
pub enum DrawCall {
    /// Texture placed in the world and projected by the camera.
    World {
        tex_key: String,
        pos: Vector2,
        height: f32,
    },
    /// Texture placed directly in screen space.
    Screen {
        tex_key: String,
        pos: Vector2,
        height: f32,
    },
    /// Text whose top-left corner is at `pos` in screen space.
    Text {
        text: String,
        font: String,
        font_size: f32,
        spacing: f32,
        pos: Vector2,
    },
}

/// Plan the frame's draw calls in submission order.
pub fn compose_frame(
    background: Option<(&Sprite, &MapPosition)>,
    sprite: Option<(&Sprite, &ScreenPosition)>,
    title: Option<&TitleLabel>,
    viewport: &Viewport,
) -> Vec<DrawCall> {
    let mut calls = Vec::with_capacity(3);

    if let Some((bg, pos)) = background {
        calls.push(DrawCall::World {
            tex_key: bg.tex_key.clone(),
            pos: pos.pos,
            height: bg.height,
        });
    }

    if let Some((s, pos)) = sprite {
        calls.push(DrawCall::Screen {
            tex_key: s.tex_key.clone(),
            pos: pos.pos,
            height: s.height,
        });
    }

    if let Some(label) = title {
        let image_height = sprite.map(|(s, _)| s.height).unwrap_or(0.0);
        calls.push(DrawCall::Text {
            text: label.text.clone(),
            font: label.font.clone(),
            font_size: label.font_size,
            spacing: label.spacing,
            pos: label.position(viewport, image_height),
        });
    }

    calls
}

/// Convert RGBA components in [0, 1] to a Raylib color.
pub fn to_color(rgba: [f32; 4]) -> Color {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::new(
        channel(rgba[0]),
        channel(rgba[1]),
        channel(rgba[2]),
        channel(rgba[3]),
    )
}

/// Clear the frame and draw the planned calls.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: NonSend<TextureStore>,
    fonts: NonSend<FontStore>,
    camera: Res<OrthoCamera>,
    viewport: Res<Viewport>,
    config: Res<GameConfig>,
    backgrounds: Query<(&Sprite, &MapPosition)>,
    sprites: Query<(&Sprite, &ScreenPosition)>,
    titles: Query<&TitleLabel>,
) {
    let calls = compose_frame(
        backgrounds.iter().next(),
        sprites.iter().next(),
        titles.iter().next(),
        &viewport,
    );

    let mut d = rl.begin_drawing(&th);
    d.clear_background(to_color(config.clear_color));

    for call in calls.iter() {
        match call {
            DrawCall::World {
                tex_key,
                pos,
                height,
            } => {
                if let Some(tex) = textures.get(tex_key) {
                    let mut d2 = d.begin_mode2D(camera.combined);
                    d2.draw_texture_v(tex, OrthoCamera::flipped_origin(*pos, *height), Color::WHITE);
                }
            }
            DrawCall::Screen {
                tex_key,
                pos,
                height,
            } => {
                if let Some(tex) = textures.get(tex_key) {
                    let top_left = Vector2 {
                        x: pos.x,
                        y: viewport.surface_to_window_top(pos.y, *height),
                    };
                    d.draw_texture_v(tex, top_left, Color::WHITE);
                }
            }
            DrawCall::Text {
                text,
                font,
                font_size,
                spacing,
                pos,
            } => {
                if let Some(font) = fonts.get(font) {
                    // `pos` is already the top edge, so no height offset.
                    let top_left = Vector2 {
                        x: pos.x,
                        y: viewport.surface_to_window_top(pos.y, 0.0),
                    };
                    d.draw_text_ex(font, text, top_left, *font_size, *spacing, Color::WHITE);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec2(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[test]
    fn test_compose_frame_order_is_background_sprite_title() {
        let bg = Sprite::new("background", 640.0, 480.0);
        let bg_pos = MapPosition::new(0.0, 0.0);
        let player = Sprite::new("sprite", 100.0, 200.0);
        let player_pos = ScreenPosition::new(350.0, 140.0);
        let label = TitleLabel::new("GatorQuest", "title", 32.0, 1.0, vec2(180.0, 32.0));

        let calls = compose_frame(
            Some((&bg, &bg_pos)),
            Some((&player, &player_pos)),
            Some(&label),
            &Viewport::new(800, 480),
        );

        assert_eq!(calls.len(), 3);
        assert!(matches!(&calls[0], DrawCall::World { tex_key, .. } if tex_key == "background"));
        assert!(matches!(&calls[1], DrawCall::Screen { tex_key, .. } if tex_key == "sprite"));
        assert!(matches!(&calls[2], DrawCall::Text { text, .. } if text == "GatorQuest"));
    }

    #[test]
    fn test_compose_frame_positions() {
        let bg = Sprite::new("background", 640.0, 480.0);
        let bg_pos = MapPosition::new(0.0, 0.0);
        let player = Sprite::new("sprite", 100.0, 200.0);
        let player_pos = ScreenPosition::new(12.0, 34.0);
        let label = TitleLabel::new("GatorQuest", "title", 32.0, 1.0, vec2(180.0, 32.0));

        let calls = compose_frame(
            Some((&bg, &bg_pos)),
            Some((&player, &player_pos)),
            Some(&label),
            &Viewport::new(800, 480),
        );

        match &calls[1] {
            DrawCall::Screen { pos, height, .. } => {
                assert_eq!((pos.x, pos.y), (12.0, 34.0));
                assert_eq!(*height, 200.0);
            }
            other => panic!("unexpected call {:?}", other),
        }
        match &calls[2] {
            DrawCall::Text { pos, .. } => {
                assert_eq!(pos.x, 400.0 - 90.0);
                assert_eq!(pos.y, 240.0 + 32.0 + 100.0);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_compose_frame_skips_missing_drawables() {
        let label = TitleLabel::new("GatorQuest", "title", 32.0, 1.0, vec2(180.0, 32.0));
        let calls = compose_frame(None, None, Some(&label), &Viewport::new(800, 480));
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            DrawCall::Text { pos, .. } => assert_eq!(pos.y, 240.0 + 32.0),
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_to_color() {
        let c = to_color([0.0, 0.0, 0.0, 1.0]);
        assert_eq!((c.r, c.g, c.b, c.a), (0, 0, 0, 255));
        let c = to_color([1.0, 0.5, 0.2, 0.0]);
        assert_eq!((c.r, c.g, c.b, c.a), (255, 128, 51, 0));
    }
}
