//! Engine configuration.
//!
//! Window settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! title = Pyrite 2D
//! fullscreen = false
//! vsync = true
//! target_fps = 120
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_WINDOW_TITLE: &str = "Pyrite 2D";
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Engine configuration.
///
/// Stores window settings and the config file path. Missing values in the
/// file retain their defaults.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window width in pixels; also the camera viewport width.
    pub window_width: u32,
    /// Window height in pixels; also the camera viewport height.
    pub window_height: u32,
    /// Window title.
    pub window_title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
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

        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        info!(
            "Loaded config: {}x{} window '{}', fps={}, vsync={}, fullscreen={}",
            self.window_width,
            self.window_height,
            self.window_title,
            self.target_fps,
            self.vsync,
            self.fullscreen
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.window_title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pyrite2d_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_are_safe() {
        let config = EngineConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.window_title, "Pyrite 2D");
        assert_eq!(config.target_fps, 120);
        assert!(config.vsync);
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let mut config = EngineConfig::with_path("/nonexistent/dir/config.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive the failed load.
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial.ini");
        fs::write(&path, "[window]\nwidth = 800\n").unwrap();

        let mut config = EngineConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.target_fps, 120);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let path = temp_path("roundtrip.ini");
        let mut config = EngineConfig::with_path(&path);
        config.window_width = 1920;
        config.window_height = 1080;
        config.window_title = "Test Window".to_string();
        config.target_fps = 60;
        config.vsync = false;
        config.fullscreen = true;
        config.save_to_file().unwrap();

        let mut reloaded = EngineConfig::with_path(&path);
        reloaded.load_from_file().unwrap();
        assert_eq!(reloaded.window_size(), (1920, 1080));
        assert_eq!(reloaded.window_title, "Test Window");
        assert_eq!(reloaded.target_fps, 60);
        assert!(!reloaded.vsync);
        assert!(reloaded.fullscreen);

        fs::remove_file(&path).ok();
    }
}
