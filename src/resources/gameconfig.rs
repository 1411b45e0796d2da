//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup so the demo runs without any config file at all.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1080
//! height = 720
//! target_fps = 60
//! title = Bear Country
//!
//! [player]
//! speed = 350
//! anim_delay_ms = 120
//!
//! [assets]
//! sprites_dir = sprites
//! scale = 8
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1080;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Bear Country";
const DEFAULT_PLAYER_SPEED: f32 = 350.0;
const DEFAULT_ANIM_DELAY_MS: f32 = 120.0;
const DEFAULT_SPRITES_DIR: &str = "sprites";
const DEFAULT_SCALE: u32 = 8;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
/// Window dimensions must fit raylib's signed pixel sizes.
const MAX_WINDOW_DIM: u32 = i32::MAX as u32;

/// Game configuration resource.
///
/// Loaded once in `main` before the window opens. Systems read the player
/// tuning values from it every frame.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second for the frame limiter.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Player speed in world units per second.
    pub player_speed: f32,
    /// Milliseconds each walk frame stays on screen.
    pub anim_delay_ms: f32,
    /// Directory holding the `sprite.<n>.png` files.
    pub sprites_dir: PathBuf,
    /// Integer nearest-neighbor upscale factor for pixel art.
    pub scale: u32,
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
            title: DEFAULT_TITLE.to_string(),
            player_speed: DEFAULT_PLAYER_SPEED,
            anim_delay_ms: DEFAULT_ANIM_DELAY_MS,
            sprites_dir: PathBuf::from(DEFAULT_SPRITES_DIR),
            scale: DEFAULT_SCALE,
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

        // [window] section
        if let Some(width) = read_uint(&config, "window", "width", MAX_WINDOW_DIM) {
            self.window_width = width;
        }
        if let Some(height) = read_uint(&config, "window", "height", MAX_WINDOW_DIM) {
            self.window_height = height;
        }
        if let Some(fps) = read_uint(&config, "window", "target_fps", u32::MAX) {
            self.target_fps = fps;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }
        if let Some(delay) = config.getfloat("player", "anim_delay_ms").ok().flatten() {
            self.anim_delay_ms = delay as f32;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "sprites_dir") {
            self.sprites_dir = PathBuf::from(dir);
        }
        if let Some(scale) = read_uint(&config, "assets", "scale", u32::MAX) {
            self.scale = scale.max(1);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, speed={}, anim_delay={}ms, sprites={:?} x{}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.player_speed,
            self.anim_delay_ms,
            self.sprites_dir,
            self.scale
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Read an unsigned key, ignoring values above `max` with a warning.
fn read_uint(config: &Ini, section: &str, key: &str, max: u32) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(v) if v <= max => Some(v),
        _ => {
            warn!(
                "[{}] {} = {} is out of range (max {}), keeping the default",
                section, key, value, max
            );
            None
        }
    }
}
