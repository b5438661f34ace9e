// config.rs

//! Configuration for the bridge grid.
//!
//! Every struct carries `#[serde(default)]`, so a config file only needs the
//! keys it wants to change. Files are JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Radius applied to every free corner of an active cell.
pub const DEFAULT_ROUND_RADIUS: f32 = 10.0;

/// Root of the configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// How cells are drawn. Only `round_radius` reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Edge length of one cell in pixels.
    pub cell_size: f32,
    /// Gap between cells in pixels.
    pub spacing: f32,
    pub round_radius: f32,
    /// When false, active cells are drawn square whatever their corners say.
    pub round_corners: bool,
    pub show_bridges: bool,
    /// RGB.
    pub active_color: [u8; 3],
    /// RGB.
    pub default_color: [u8; 3],
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            spacing: 0.0,
            round_radius: DEFAULT_ROUND_RADIUS,
            round_corners: true,
            show_bridges: true,
            active_color: [0, 0, 0],
            default_color: [255, 255, 255],
        }
    }
}

/// What a click on a bridge cell does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BridgeTogglePolicy {
    /// The toggle fails and the grid is untouched.
    #[default]
    Reject,
    /// The bridge is dropped and the cell becomes active.
    Override,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BehaviorConfig {
    pub bridge_toggle: BridgeTogglePolicy,
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        let a = &self.appearance;
        if !(a.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!("cell_size must be positive, got {}", a.cell_size)));
        }
        if !(a.spacing >= 0.0) {
            return Err(ConfigError::Invalid(format!("spacing must not be negative, got {}", a.spacing)));
        }
        if !(a.round_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "round_radius must not be negative, got {}",
                a.round_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.behavior.bridge_toggle, BridgeTogglePolicy::Reject);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_json(
            r#"{ "grid": { "width": 7 }, "behavior": { "bridge_toggle": "override" } }"#,
        )
        .unwrap();
        assert_eq!(config.grid.width, 7);
        assert_eq!(config.grid.height, DEFAULT_HEIGHT);
        assert_eq!(config.behavior.bridge_toggle, BridgeTogglePolicy::Override);
        assert_eq!(config.appearance, AppearanceConfig::default());
    }

    #[test]
    fn rejects_unusable_values() {
        assert!(matches!(
            Config::from_json(r#"{ "grid": { "height": 0 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "appearance": { "round_radius": -1.0 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(Config::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Config::load("/nonexistent/bridge-grid.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
