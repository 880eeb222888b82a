//! Configuration file handling for asciicam.
//!
//! Loads configuration from `~/.config/asciicam/config.toml` or a custom
//! path. Every field has a built-in default, so a missing file or a partial
//! file is fine; CLI flags override whatever the file provides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Target frame rate of the interactive loop.
pub const TARGET_FPS: u32 = 30;

/// Configuration file structure for asciicam.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub enhance: EnhanceConfig,
    #[serde(default)]
    pub glitch: GlitchConfig,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub device: u32,
    #[serde(default = "default_true")]
    pub mirror: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: 0,
            mirror: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { fps: TARGET_FPS }
    }
}

#[derive(Debug, Deserialize)]
pub struct EnhanceConfig {
    #[serde(default = "default_brightness")]
    pub brightness: i32,
    #[serde(default = "default_contrast")]
    pub contrast: f32,
    #[serde(default = "default_true")]
    pub equalize: bool,
    #[serde(default = "default_clip_limit")]
    pub clip_limit: f32,
    #[serde(default = "default_true")]
    pub edge_blend: bool,
    #[serde(default = "default_edge_alpha")]
    pub edge_alpha: f32,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            brightness: default_brightness(),
            contrast: default_contrast(),
            equalize: true,
            clip_limit: default_clip_limit(),
            edge_blend: true,
            edge_alpha: default_edge_alpha(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GlitchConfig {
    #[serde(default = "default_glitch_intensity")]
    pub intensity: f32,
    #[serde(default = "default_glitch_shift")]
    pub max_shift: i32,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            intensity: default_glitch_intensity(),
            max_shift: default_glitch_shift(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_fps() -> u32 {
    TARGET_FPS
}

fn default_brightness() -> i32 {
    10
}

fn default_contrast() -> f32 {
    1.1
}

fn default_clip_limit() -> f32 {
    3.0
}

fn default_edge_alpha() -> f32 {
    0.15
}

fn default_glitch_intensity() -> f32 {
    0.05
}

fn default_glitch_shift() -> i32 {
    5
}

impl Config {
    /// Load configuration from a file path.
    /// Returns the default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Default config path: ~/.config/asciicam/config.toml
fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("asciicam")
        .join("config.toml")
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.camera.device, 0);
        assert!(config.camera.mirror);
        assert_eq!(config.display.fps, 30);
        assert_eq!(config.enhance.brightness, 10);
        assert!((config.enhance.contrast - 1.1).abs() < 1e-6);
        assert!((config.glitch.intensity - 0.05).abs() < 1e-6);
        assert_eq!(config.glitch.max_shift, 5);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = Config::load(Some(Path::new("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.camera.device, 0);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[camera]\ndevice = 2\n\n[glitch]\nintensity = 0.5").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.camera.device, 2);
        assert!(config.camera.mirror); // untouched defaults survive
        assert!((config.glitch.intensity - 0.5).abs() < 1e-6);
        assert_eq!(config.glitch.max_shift, 5);
    }

    #[test]
    fn test_load_invalid_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
