//! Configuration Module
//!
//! Bundles every tunable the character and camera carry into one serde
//! struct with JSON load/save, so a tuning pass edits a file instead of
//! recompiling. Sections omitted from the JSON fall back to their defaults,
//! which keeps hand-written configs short.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::boom::BoomConfig;
use crate::camera::look::LookConfig;
use crate::camera::zoom::ZoomConfig;
use crate::combat::spread::SpreadConfig;
use crate::player::movement::MovementConfig;

/// All character and camera tuning in one bundle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterConfig {
    /// Ground movement, jumping, gravity
    pub movement: MovementConfig,
    /// Turn/look rates and mouse sensitivity
    pub look: LookConfig,
    /// Aim-down-sights FOV interpolation
    pub zoom: ZoomConfig,
    /// Crosshair spread factors
    pub spread: SpreadConfig,
    /// Camera boom placement and lag
    pub boom: BoomConfig,
}

/// Errors that can occur while loading or saving a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Read a config from a JSON file.
pub fn load_config(path: &Path) -> Result<ShooterConfig, ConfigError> {
    let data = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)?;
    Ok(config)
}

/// Write a config to a JSON file, pretty-printed for hand editing.
pub fn save_config(path: &Path, config: &ShooterConfig) -> Result<(), ConfigError> {
    // Ensure parent directories exist.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ShooterConfig::default();
        assert_eq!(config.movement.max_walk_speed, 600.0);
        assert_eq!(config.zoom.default_fov, 90.0);
        assert_eq!(config.zoom.zoomed_fov, 35.0);
        assert_eq!(config.look.hip_turn_rate, 90.0);
        assert_eq!(config.spread.baseline, 0.5);
        assert_eq!(config.boom.arm_length, 300.0);
    }

    #[test]
    fn test_round_trip() {
        let dir = std::env::temp_dir().join("hipfire_config_round_trip");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("shooter.json");

        let mut config = ShooterConfig::default();
        config.zoom.zoomed_fov = 40.0;
        config.movement.max_walk_speed = 450.0;

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_json_uses_defaults_elsewhere() {
        let json = r#"{ "zoom": { "default_fov": 100.0, "zoomed_fov": 45.0, "interp_speed": 10.0 } }"#;
        let config: ShooterConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.zoom.default_fov, 100.0);
        // Untouched sections keep their defaults
        assert_eq!(config.movement.max_walk_speed, 600.0);
        assert_eq!(config.spread.baseline, 0.5);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("hipfire_config_does_not_exist.json");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_bad_json_is_a_json_error() {
        let dir = std::env::temp_dir().join("hipfire_config_bad_json");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
