//! Configuration file support for paintboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintboard/config.toml`. Settings include canvas geometry,
//! drawing defaults, tool sizes, fill tolerance, history depth and share links.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{
    CanvasConfig, DrawingConfig, FillConfig, HistoryConfig, ShareConfig, ToolsConfig,
};

use crate::draw::PALETTE_SIZE;
use crate::tools::ToolKind;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_EXTENT: i32 = 8192;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 768
///
/// [drawing]
/// default_color_index = 2
///
/// [tools]
/// free_hand = 6.0
///
/// [fill]
/// tolerance = 8
///
/// [history]
/// max_depth = 50
///
/// [share]
/// base_url = "https://paint.example.org/game"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and on-screen origin
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial color and rendering options
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Initial tool sizes
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Paint bucket matching
    #[serde(default)]
    pub fill: FillConfig,

    /// Undo history limits
    #[serde(default)]
    pub history: HistoryConfig,

    /// Share link settings
    #[serde(default)]
    pub share: ShareConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to their
    /// default) and a warning is logged.
    pub fn validate_and_clamp(&mut self) {
        for (name, extent) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_EXTENT).contains(&*extent) {
                warn!("Invalid canvas {name} {extent}, clamping to 1-{MAX_CANVAS_EXTENT} range");
                *extent = (*extent).clamp(1, MAX_CANVAS_EXTENT);
            }
        }

        if !self.canvas.origin_x.is_finite() || !self.canvas.origin_y.is_finite() {
            warn!("Non-finite canvas origin, resetting to (0, 0)");
            self.canvas.origin_x = 0.0;
            self.canvas.origin_y = 0.0;
        }

        if self.drawing.default_color_index >= PALETTE_SIZE {
            warn!(
                "Invalid default_color_index {}, palette has {PALETTE_SIZE} entries; using 0",
                self.drawing.default_color_index
            );
            self.drawing.default_color_index = 0;
        }

        for kind in ToolKind::ALL {
            let (min, max) = kind.size_bounds();
            let size = self.tools.size_mut(kind);
            if !(min..=max).contains(&*size) {
                warn!(
                    "Invalid {kind} size {:.1}, clamping to {min:.0}-{max:.0} range",
                    *size
                );
                *size = if size.is_finite() {
                    (*size).clamp(min, max)
                } else {
                    min
                };
            }
        }

        if url::Url::parse(&self.share.base_url).is_err() {
            warn!(
                "Invalid share base_url '{}', falling back to '{}'",
                self.share.base_url,
                types::default_base_url()
            );
            self.share.base_url = types::default_base_url();
        }

        if self.share.query_param.trim().is_empty() {
            warn!("Empty share query_param, falling back to 'source'");
            self.share.query_param = types::default_query_param();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.tools.eraser, 200.0);
        assert_eq!(config.share.query_param, "source");
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas]\nwidth = 320\n\n[fill]\ntolerance = 12\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.fill.tolerance, 12);
        assert_eq!(config.tools.free_hand, 10.0);
    }

    #[test]
    fn invalid_values_are_clamped() {
        let mut config = Config::default();
        config.canvas.width = 0;
        config.canvas.height = 100_000;
        config.drawing.default_color_index = 42;
        config.tools.free_hand = 99.0;
        config.tools.square_solid = 4.0;
        config.tools.eraser = f64::NAN;
        config.share.base_url = "not a url".to_string();
        config.share.query_param = " ".to_string();

        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_EXTENT);
        assert_eq!(config.drawing.default_color_index, 0);
        assert_eq!(config.tools.free_hand, 30.0);
        assert_eq!(config.tools.square_solid, 0.0);
        assert_eq!(config.tools.eraser, 1.0);
        assert_eq!(config.share.base_url, "http://localhost:4200/game");
        assert_eq!(config.share.query_param, "source");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("share"));
        assert!(schema.contains("tolerance"));
    }
}
