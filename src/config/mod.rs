//! Configuration file support for phiddle.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/phiddle/config.toml`. Settings cover tool appearance, the
//! measurement label, the info and zoom windows, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod style;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use style::Style;
pub use types::{LabelConfig, ToolsConfig, WindowsConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [tools]
/// line_width = 1.5
/// color = "red"
///
/// [label]
/// font_size = 14.0
///
/// [windows]
/// zoom_factor = 8.0
///
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Measuring tool appearance
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Measurement label appearance
    #[serde(default)]
    pub label: LabelConfig,

    /// Info window, zoom window and help lines
    #[serde(default)]
    pub windows: WindowsConfig,

    /// Key bindings for actions
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

fn clamp_field(value: &mut f64, min: f64, max: f64, name: &str) {
    if !(min..=max).contains(value) {
        let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
        log::warn!(
            "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
            name,
            *value,
            min,
            max
        );
        *value = clamped;
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    fn validate_and_clamp(&mut self) {
        let tools = &mut self.tools;
        clamp_field(&mut tools.line_width, 0.5, 10.0, "line_width");
        clamp_field(&mut tools.wide_line_factor, 1.0, 10.0, "wide_line_factor");
        clamp_field(&mut tools.endpoint_size, 4.0, 48.0, "endpoint_size");
        clamp_field(&mut tools.mark_size, 2.0, 40.0, "mark_size");
        clamp_field(&mut tools.bounds_padding, 0.0, 32.0, "bounds_padding");

        let label = &mut self.label;
        clamp_field(&mut label.font_size, 6.0, 48.0, "font_size");
        clamp_field(&mut label.padding, 0.0, 20.0, "label padding");

        let windows = &mut self.windows;
        clamp_field(&mut windows.size_divisor, 2.0, 20.0, "size_divisor");
        clamp_field(&mut windows.zoom_factor, 1.0, 20.0, "zoom_factor");
        clamp_field(&mut windows.margin, 0.0, 100.0, "window margin");
        clamp_field(&mut windows.crosshair_size, 0.0, 200.0, "crosshair_size");

        if !(10..=1000).contains(&windows.refresh_interval_ms) {
            log::warn!(
                "Invalid refresh_interval_ms {}, clamping to 10-1000 range",
                windows.refresh_interval_ms
            );
            windows.refresh_interval_ms = windows.refresh_interval_ms.clamp(10, 1000);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("phiddle");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `path`. A missing file yields defaults.
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

    /// Serializes the config to TOML at the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the commented example config to the user's config directory.
    ///
    /// # Errors
    /// Fails if a config file already exists or the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema of the config file, for editor integration.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{GOLD, RED};

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tools.line_width, 1.0);
        assert_eq!(config.windows.size_divisor, 5.0);
        assert_eq!(config.label.font_family, "Monospace");
        assert_eq!(config.keybindings.exit, vec!["Escape".to_string()]);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [tools]
            color = "gold"
            line_width = 2.0

            [windows]
            zoom_factor = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(config.tools.color.to_color(), GOLD);
        assert_eq!(config.tools.line_width, 2.0);
        assert_eq!(config.tools.golden_ratio_color.to_color(), GOLD);
        assert_eq!(config.windows.zoom_factor, 8.0);
        assert_eq!(config.windows.refresh_interval_ms, 50);
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.tools.line_width = 50.0;
        config.tools.endpoint_size = 1.0;
        config.label.font_size = f64::NAN;
        config.windows.zoom_factor = 0.0;
        config.windows.refresh_interval_ms = 5;

        config.validate_and_clamp();

        assert_eq!(config.tools.line_width, 10.0);
        assert_eq!(config.tools.endpoint_size, 4.0);
        assert_eq!(config.label.font_size, 6.0);
        assert_eq!(config.windows.zoom_factor, 1.0);
        assert_eq!(config.windows.refresh_interval_ms, 10);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.tools.color.to_color(), RED);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[tools\nline_width = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.windows.zoom_factor = 3.0;
        config.keybindings.exit = vec!["Ctrl+Q".to_string()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.windows.zoom_factor, 3.0);
        assert_eq!(loaded.keybindings.exit, vec!["Ctrl+Q".to_string()]);
    }

    #[test]
    fn example_config_parses() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        for section in ["tools", "label", "windows", "keybindings"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
