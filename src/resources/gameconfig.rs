//! Configuration resource.
//!
//! Settings loaded from an INI file, with defaults for safe startup when the
//! file or individual keys are missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! vsync = true
//! target_fps = 120
//!
//! [audio]
//! enabled = true
//! assets = assets
//!
//! [garden]
//! file = garden.json
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_AUDIO_ENABLED: bool = true;
const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_GARDEN_FILE: &str = "garden.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Configuration resource.
///
/// Stores window settings, audio options, and the garden save path.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Spawn the audio thread at startup.
    pub audio_enabled: bool,
    /// Directory sounds and music are loaded from.
    pub assets_dir: PathBuf,
    /// Path the garden is saved to / loaded from.
    pub garden_file: PathBuf,
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
            audio_enabled: DEFAULT_AUDIO_ENABLED,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            garden_file: PathBuf::from(DEFAULT_GARDEN_FILE),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration reading from a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an error
    /// if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

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

        // [audio] section
        if let Some(enabled) = config.getbool("audio", "enabled").ok().flatten() {
            self.audio_enabled = enabled;
        }
        if let Some(assets) = config.get("audio", "assets") {
            self.assets_dir = PathBuf::from(assets);
        }

        // [garden] section
        if let Some(file) = config.get("garden", "file") {
            self.garden_file = PathBuf::from(file);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, audio={}, garden file={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.audio_enabled,
            self.garden_file
        );

        Ok(())
    }

    /// Save configuration to the INI file. Creates the file if missing.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("audio", "enabled", Some(self.audio_enabled.to_string()));
        config.set(
            "audio",
            "assets",
            Some(self.assets_dir.display().to_string()),
        );
        config.set(
            "garden",
            "file",
            Some(self.garden_file.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Path of a sound effect inside the assets directory.
    pub fn sound_path(&self, name: &str) -> String {
        self.assets_dir
            .join("sounds")
            .join(format!("{}.wav", name))
            .display()
            .to_string()
    }

    /// Path of the looping background music inside the assets directory.
    pub fn music_path(&self) -> String {
        self.assets_dir
            .join("sounds")
            .join("ambient.ogg")
            .display()
            .to_string()
    }
}
