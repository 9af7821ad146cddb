//! Configuration file handling
//!
//! Every value has a default matching the shipped tray, so an empty file
//! (or no file at all) reproduces the stock models. Files are JSON or TOML,
//! chosen by extension.
//!
//! Configuration is organized into sections:
//! - Design: tray, pocket and cover dimensions
//! - Foot: slot cut dimensions for round feet
//! - Output: where and how artifacts are written

use crate::error::{SettingsError, SettingsResult};
use dicetray_generator::{DesignParameters, FootCutParameters};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                other.unwrap_or("no extension")
            ))),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the artifacts are written to
    pub directory: PathBuf,
    /// File name prefix; defaults to the executable's name
    pub base_name: Option<String>,
    /// OpenSCAD `$fn` written at the top of every file
    pub resolution: u32,
    /// Also write csgrs-evaluated STL previews
    pub stl: bool,
    /// Facets per cylinder in STL previews
    pub mesh_segments: u32,
    /// Also write a single-shape preview of the first pattern
    pub preview: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            base_name: None,
            resolution: 250,
            stl: false,
            mesh_segments: 64,
            preview: false,
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub design: DesignParameters,
    /// Slot cuts for trays standing on round feet. Only read by callers of
    /// `gencuts`; the built-in trays have no feet.
    pub foot: FootCutParameters,
    pub output: OutputSettings,
}

impl Config {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.design
            .validate()
            .map_err(|e| SettingsError::InvalidSetting {
                key: "design".to_string(),
                reason: e.to_string(),
            })?;

        self.foot
            .validate()
            .map_err(|e| SettingsError::InvalidSetting {
                key: "foot".to_string(),
                reason: e.to_string(),
            })?;

        if self.output.resolution == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "output.resolution".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.output.mesh_segments < 3 {
            return Err(SettingsError::InvalidSetting {
                key: "output.mesh_segments".to_string(),
                reason: "must be at least 3".to_string(),
            });
        }

        if let Some(name) = &self.output.base_name {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(SettingsError::InvalidSetting {
                    key: "output.base_name".to_string(),
                    reason: format!("'{}' is not a plain file name", name),
                });
            }
        }

        Ok(())
    }
}
