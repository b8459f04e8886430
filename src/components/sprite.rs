use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and its size in world units.
/// The size is taken from the backing texture when the sprite is created.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }

    /// Half of the sprite's size, the offset from its corner to its center.
    pub fn half_size(&self) -> Vector2 {
        Vector2 {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}
