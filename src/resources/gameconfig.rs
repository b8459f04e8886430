//! Game configuration resource.
//!
//! Manages demo settings loaded from an INI configuration file. Provides
//! defaults for safe startup so a missing file or key never stops the demo.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 480
//! target_fps = 60
//! title = GatorQuest
//!
//! [render]
//! clear_color = 0, 0, 0, 1
//!
//! [assets]
//! root = ./assets
//! sprite = kyloren.jpg
//! secondary = badlogic.jpg
//! background = house.png
//! font = TitleFont.fnt
//!
//! [title]
//! text = GatorQuest
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_WINDOW_TITLE: &str = "GatorQuest";
const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const DEFAULT_ASSET_ROOT: &str = "./assets";
const DEFAULT_SPRITE_TEXTURE: &str = "kyloren.jpg";
const DEFAULT_SECONDARY_TEXTURE: &str = "badlogic.jpg";
const DEFAULT_BACKGROUND_TEXTURE: &str = "house.png";
const DEFAULT_TITLE_FONT: &str = "TitleFont.fnt";
const DEFAULT_TITLE_TEXT: &str = "GatorQuest";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// File names of the assets loaded at startup, relative to `root`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetManifest {
    /// Directory every asset is resolved against.
    pub root: PathBuf,
    /// Image bound to the movable sprite.
    pub sprite: String,
    /// Second image, loaded and released alongside the others.
    pub secondary: String,
    /// Image drawn as the camera-space background.
    pub background: String,
    /// Bitmap font used for the title.
    pub font: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ASSET_ROOT),
            sprite: DEFAULT_SPRITE_TEXTURE.to_string(),
            secondary: DEFAULT_SECONDARY_TEXTURE.to_string(),
            background: DEFAULT_BACKGROUND_TEXTURE.to_string(),
            font: DEFAULT_TITLE_FONT.to_string(),
        }
    }
}

impl AssetManifest {
    /// Full path of an asset file name.
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Window title.
    pub window_title: String,
    /// Frame clear color as RGBA components in [0, 1].
    pub clear_color: [f32; 4],
    /// Assets loaded at startup.
    pub assets: AssetManifest,
    /// Text of the title label.
    pub title_text: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            clear_color: DEFAULT_CLEAR_COLOR,
            assets: AssetManifest::default(),
            title_text: DEFAULT_TITLE_TEXT.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, assets from {:?}",
            self.window_width, self.window_height, self.target_fps, self.assets.root
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }

        // [render] section
        if let Some(raw) = config.get("render", "clear_color") {
            match parse_clear_color(&raw) {
                Some(color) => self.clear_color = color,
                None => warn!(
                    "Ignoring clear_color '{}': expected four numbers in [0, 1]",
                    raw
                ),
            }
        }

        // [assets] section
        if let Some(root) = config.get("assets", "root") {
            self.assets.root = PathBuf::from(root);
        }
        if let Some(sprite) = config.get("assets", "sprite") {
            self.assets.sprite = sprite;
        }
        if let Some(secondary) = config.get("assets", "secondary") {
            self.assets.secondary = secondary;
        }
        if let Some(background) = config.get("assets", "background") {
            self.assets.background = background;
        }
        if let Some(font) = config.get("assets", "font") {
            self.assets.font = font;
        }

        // [title] section
        if let Some(text) = config.get("title", "text") {
            self.title_text = text;
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Parse `"r, g, b, a"` with every component in [0, 1].
pub fn parse_clear_color(raw: &str) -> Option<[f32; 4]> {
    let parts: Vec<f32> = raw
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;
    let color: [f32; 4] = parts.try_into().ok()?;
    if color.iter().all(|c| (0.0..=1.0).contains(c)) {
        Some(color)
    } else {
        None
    }
}
