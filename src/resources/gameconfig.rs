//! Viewer configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! vsync = true
//!
//! [map]
//! seed = 420
//! size = 4096
//! tile_size = 32
//! image = ./assets/textures/map.png
//!
//! [minimap]
//! width = 120
//! margin = 20
//! visible = true
//!
//! [view]
//! scroll_speed = 10
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::mapgen::{DEFAULT_MAP_SEED, DEFAULT_MAP_SIZE, DEFAULT_TILE_SIZE};
use crate::resources::minimap::{DEFAULT_MINIMAP_MARGIN, DEFAULT_MINIMAP_WIDTH, MinimapLayout};
use crate::resources::viewport::DEFAULT_SCROLL_SPEED;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_MINIMAP_VISIBLE: bool = true;
const DEFAULT_MAP_IMAGE: &str = "./assets/textures/map.png";
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Viewer configuration resource.
///
/// Read once at startup and again whenever the user asks for a reload. The
/// [`crate::systems::gameconfig`] systems push changed values into the window
/// and the view resources.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Seed of the generated tile map.
    pub map_seed: u64,
    /// Edge length of the generated (square) map in pixels.
    pub map_size: u32,
    /// Edge length of one generated tile in pixels.
    pub tile_size: u32,
    /// Image shown as the alternate map.
    pub map_image: PathBuf,
    /// Minimap width in screen pixels.
    pub minimap_width: f32,
    /// Minimap distance from the bottom-right corner.
    pub minimap_margin: f32,
    /// Whether the minimap starts visible.
    pub minimap_visible: bool,
    /// Map pixels scrolled per frame at zoom 1.
    pub scroll_speed: f32,
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
            vsync: DEFAULT_VSYNC,
            map_seed: DEFAULT_MAP_SEED,
            map_size: DEFAULT_MAP_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            map_image: PathBuf::from(DEFAULT_MAP_IMAGE),
            minimap_width: DEFAULT_MINIMAP_WIDTH,
            minimap_margin: DEFAULT_MINIMAP_MARGIN,
            minimap_visible: DEFAULT_MINIMAP_VISIBLE,
            scroll_speed: DEFAULT_SCROLL_SPEED,
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
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, map seed={} size={} tile={}, minimap {}px",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.map_seed,
            self.map_size,
            self.tile_size,
            self.minimap_width
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
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
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [map] section
        if let Some(seed) = config.getuint("map", "seed").ok().flatten() {
            self.map_seed = seed;
        }
        if let Some(size) = config.getuint("map", "size").ok().flatten() {
            self.map_size = size as u32;
        }
        if let Some(tile) = config.getuint("map", "tile_size").ok().flatten() {
            self.tile_size = tile as u32;
        }
        if let Some(image) = config.get("map", "image") {
            self.map_image = PathBuf::from(image);
        }

        // [minimap] section
        if let Some(width) = checked_float(config, "minimap", "width", false) {
            self.minimap_width = width;
        }
        if let Some(margin) = checked_float(config, "minimap", "margin", true) {
            self.minimap_margin = margin;
        }
        if let Some(visible) = config.getbool("minimap", "visible").ok().flatten() {
            self.minimap_visible = visible;
        }

        // [view] section
        if let Some(speed) = checked_float(config, "view", "scroll_speed", false) {
            self.scroll_speed = speed;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [map] section
        config.set("map", "seed", Some(self.map_seed.to_string()));
        config.set("map", "size", Some(self.map_size.to_string()));
        config.set("map", "tile_size", Some(self.tile_size.to_string()));
        config.set("map", "image", Some(self.map_image.display().to_string()));

        // [minimap] section
        config.set("minimap", "width", Some(self.minimap_width.to_string()));
        config.set("minimap", "margin", Some(self.minimap_margin.to_string()));
        config.set("minimap", "visible", Some(self.minimap_visible.to_string()));

        // [view] section
        config.set("view", "scroll_speed", Some(self.scroll_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Minimap layout described by this configuration.
    pub fn minimap_layout(&self) -> MinimapLayout {
        MinimapLayout {
            width: self.minimap_width,
            margin: self.minimap_margin,
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Read a float that must be finite and positive (or zero when `allow_zero`).
///
/// Rejected values are logged and reported as absent so the caller keeps its
/// current setting.
fn checked_float(config: &Ini, section: &str, key: &str, allow_zero: bool) -> Option<f32> {
    let value = config.getfloat(section, key).ok().flatten()? as f32;
    let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if value.is_finite() && in_range {
        Some(value)
    } else {
        warn!("Ignoring [{}] {} = {}: out of range", section, key, value);
        None
    }
}
