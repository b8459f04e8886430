//! Demo lifecycle: create, per-frame update schedule, dispose.
//!
//! - [`load_assets`] talks to Raylib and loads every texture and the title
//!   font named by the [`GameConfig`] asset manifest.
//! - [`create`] hands the loaded assets to the world and lays out the scene.
//! - [`update_schedule`] builds the per-frame logic in its fixed order.
//! - [`dispose`] releases everything [`load_assets`] acquired, once.

use std::ffi::CString;

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::ffi;
use raylib::prelude::*;

use crate::components::inputcontrolled::{InputControlled, MouseControlled};
use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::titlelabel::TitleLabel;
use crate::resources::assetstore::{AssetStore, FontStore, TextureStore};
use crate::resources::camera2d::OrthoCamera;
use crate::resources::gameconfig::{AssetManifest, GameConfig};
use crate::resources::input::InputState;
use crate::resources::viewport::Viewport;
use crate::systems::camera::update_camera;
use crate::systems::keyboardcontroller::keyboard_controller;
use crate::systems::mousecontroller::mouse_controller;

/// Texture key of the movable sprite.
pub const SPRITE_TEXTURE: &str = "sprite";
/// Texture key of the secondary image.
pub const SECONDARY_TEXTURE: &str = "secondary";
/// Texture key of the background.
pub const BACKGROUND_TEXTURE: &str = "background";
/// Font key of the title.
pub const TITLE_FONT: &str = "title";
/// Glyph spacing used for the title.
pub const TITLE_SPACING: f32 = 1.0;

/// Everything loaded from disk at startup.
pub struct LoadedAssets {
    pub textures: TextureStore,
    pub fonts: FontStore,
    pub layout: SceneLayout,
}

/// Sizes the scene is laid out from.
#[derive(Debug, Clone)]
pub struct SceneLayout {
    /// Size of the movable sprite's image.
    pub sprite_size: Vector2,
    /// Size of the background image.
    pub background_size: Vector2,
    /// Title with its measured layout.
    pub title: TitleLabel,
}

/// Entities spawned by [`setup_scene`].
#[derive(Debug, Clone, Copy)]
pub struct SceneEntities {
    pub sprite: Entity,
    pub background: Entity,
    pub title: Entity,
}

fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    manifest: &AssetManifest,
    file: &str,
) -> Result<Texture2D, String> {
    let path = manifest.path(file);
    let path_str = path
        .to_str()
        .ok_or_else(|| format!("Asset path {:?} is not valid UTF-8", path))?;
    let texture = rl
        .load_texture(thread, path_str)
        .map_err(|e| format!("Failed to load texture {}: {}", path.display(), e))?;
    debug!(
        "Loaded texture {} ({}x{})",
        path.display(),
        texture.width,
        texture.height
    );
    Ok(texture)
}

fn load_font(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    manifest: &AssetManifest,
    file: &str,
) -> Result<Font, String> {
    let path = manifest.path(file);
    let path_str = path
        .to_str()
        .ok_or_else(|| format!("Asset path {:?} is not valid UTF-8", path))?;
    rl.load_font(thread, path_str)
        .map_err(|e| format!("Failed to load font {}: {}", path.display(), e))
}

/// Measure the bounding box of `text` drawn with `font`.
fn measure_text(font: &Font, text: &str, font_size: f32, spacing: f32) -> Result<Vector2, String> {
    let c_text =
        CString::new(text).map_err(|e| format!("Title text '{}' is invalid: {}", text, e))?;
    let measured = unsafe { ffi::MeasureTextEx(**font, c_text.as_ptr(), font_size, spacing) };
    Ok(Vector2 {
        x: measured.x,
        y: measured.y,
    })
}

/// Load the textures and font named in the configuration.
///
/// Any failure is fatal for the demo and is returned to the caller. Assets
/// loaded before the failure are released when the partial stores drop.
pub fn load_assets(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &GameConfig,
) -> Result<LoadedAssets, String> {
    let manifest = &config.assets;
    let mut textures = TextureStore::new();
    let mut fonts = FontStore::new();

    let sprite_tex = load_texture(rl, thread, manifest, &manifest.sprite)?;
    let sprite_size = Vector2 {
        x: sprite_tex.width as f32,
        y: sprite_tex.height as f32,
    };
    textures.insert(SPRITE_TEXTURE, sprite_tex)?;

    let secondary_tex = load_texture(rl, thread, manifest, &manifest.secondary)?;
    textures.insert(SECONDARY_TEXTURE, secondary_tex)?;

    let background_tex = load_texture(rl, thread, manifest, &manifest.background)?;
    let background_size = Vector2 {
        x: background_tex.width as f32,
        y: background_tex.height as f32,
    };
    textures.insert(BACKGROUND_TEXTURE, background_tex)?;

    let font = load_font(rl, thread, manifest, &manifest.font)?;
    let font_size = font.baseSize as f32;
    let title_size = measure_text(&font, &config.title_text, font_size, TITLE_SPACING)?;
    fonts.insert(TITLE_FONT, font)?;

    let title = TitleLabel::new(
        config.title_text.clone(),
        TITLE_FONT,
        font_size,
        TITLE_SPACING,
        title_size,
    );

    info!(
        "Loaded {} textures and {} fonts from {}",
        textures.len(),
        fonts.len(),
        manifest.root.display()
    );

    Ok(LoadedAssets {
        textures,
        fonts,
        layout: SceneLayout {
            sprite_size,
            background_size,
            title,
        },
    })
}

/// Spawn the background, the movable sprite and the title, and create the camera.
///
/// Reads the [`Viewport`] resource, which must already be present.
pub fn setup_scene(world: &mut World, layout: SceneLayout) -> SceneEntities {
    let viewport = *world.resource::<Viewport>();

    // Center the camera so the world origin lands on the bottom-left corner.
    let mut camera = OrthoCamera::new(viewport.w as f32, viewport.h as f32);
    let center = viewport.center();
    camera.translate(center.x, center.y);
    camera.update();
    world.insert_resource(camera);
    world.init_resource::<InputState>();

    let background = world
        .spawn((
            Sprite::new(
                BACKGROUND_TEXTURE,
                layout.background_size.x,
                layout.background_size.y,
            ),
            MapPosition::new(0.0, 0.0),
        ))
        .id();

    let start = viewport.centered(layout.sprite_size.x, layout.sprite_size.y);
    let sprite = world
        .spawn((
            Sprite::new(SPRITE_TEXTURE, layout.sprite_size.x, layout.sprite_size.y),
            ScreenPosition::from_vec(start),
            InputControlled,
            MouseControlled,
        ))
        .id();

    let title = world.spawn(layout.title).id();

    debug!("Sprite starts at ({}, {})", start.x, start.y);

    SceneEntities {
        sprite,
        background,
        title,
    }
}

/// Hand the loaded assets to the world and lay out the scene.
pub fn create(world: &mut World, assets: LoadedAssets) -> SceneEntities {
    world.insert_non_send_resource(assets.textures);
    world.insert_non_send_resource(assets.fonts);
    setup_scene(world, assets.layout)
}

/// Per-frame logic in its fixed order: keyboard, pointer, then camera.
///
/// Input polling and rendering talk to Raylib and are added by the caller
/// around this chain.
pub fn update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems((keyboard_controller, mouse_controller, update_camera).chain());
    update
}

/// Take the `AssetStore<T>` out of the world and release what it holds.
///
/// Returns how many assets were released; 0 when no store is present.
pub fn release_store<T: 'static>(world: &mut World) -> usize {
    world
        .remove_non_send_resource::<AssetStore<T>>()
        .map(|mut store| store.release_all())
        .unwrap_or(0)
}

/// Release every texture and font held by the world.
///
/// The stores are removed from the world, so a second call releases nothing.
/// Must run before the Raylib handle is dropped.
pub fn dispose(world: &mut World) -> usize {
    let textures = release_store::<Texture2D>(world);
    let fonts = release_store::<Font>(world);
    info!("Released {} textures and {} fonts", textures, fonts);
    textures + fonts
}
