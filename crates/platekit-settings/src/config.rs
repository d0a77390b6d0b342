//! Layout configuration for PlateKit
//!
//! Holds the machine values the layout engine needs: platform size, the
//! machine type (which selects bed clip zones), print-head clearance and
//! gantry height, and the brim/skirt margin around each object.
//! Supports JSON and TOML files.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use platekit_core::Vec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Build platform settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Platform width (x) in mm
    pub width: f64,
    /// Platform depth (y) in mm
    pub depth: f64,
    /// Build height (z) in mm
    pub height: f64,
    /// Machine identifier, e.g. "ultimaker2"
    #[serde(default)]
    pub machine_type: String,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            width: 100.0,
            depth: 100.0,
            height: 100.0,
            machine_type: String::new(),
        }
    }
}

/// Print-head extents measured from the nozzle.
///
/// The sign convention follows the machine profile: the side with the
/// smaller extent is the side the head clears first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadSettings {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Tallest object that can have others printed after it
    pub gantry_height: f64,
}

impl Default for HeadSettings {
    fn default() -> Self {
        Self {
            x_min: 18.0,
            x_max: 18.0,
            y_min: 18.0,
            y_max: 35.0,
            gantry_height: 60.0,
        }
    }
}

impl HeadSettings {
    /// Head travels left to right
    pub fn left_to_right(&self) -> bool {
        self.x_min < self.x_max
    }

    /// Head travels front to back
    pub fn front_to_back(&self) -> bool {
        self.y_min < self.y_max
    }

    /// Clearance the head needs around an object, per axis
    pub fn head_offsets(&self) -> Vec2 {
        Vec2::new(self.x_min.min(self.x_max), self.y_min.min(self.y_max))
    }
}

/// Extra margin added around each object for brim, skirt or raft
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeOffsets {
    pub x: f64,
    pub y: f64,
}

impl SizeOffsets {
    pub fn as_vec(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Complete layout configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub machine: MachineSettings,
    pub head: HeadSettings,
    #[serde(default)]
    pub size_offsets: SizeOffsets,
}

impl LayoutConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        config.validate()?;
        debug!("Loaded layout config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("machine.width", self.machine.width)?;
        check_positive("machine.depth", self.machine.depth)?;
        check_positive("machine.height", self.machine.height)?;

        for (key, value) in [
            ("head.x_min", self.head.x_min),
            ("head.x_max", self.head.x_max),
            ("head.y_min", self.head.y_min),
            ("head.y_max", self.head.y_max),
        ] {
            if !value.is_finite() {
                return Err(out_of_range(key, value));
            }
        }

        check_non_negative("head.gantry_height", self.head.gantry_height)?;
        check_non_negative("size_offsets.x", self.size_offsets.x)?;
        check_non_negative("size_offsets.y", self.size_offsets.y)?;
        Ok(())
    }
}

/// Default location of the layout config file
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("platekit").join("layout.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn check_positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(key, value))
    }
}

fn check_non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(out_of_range(key, value))
    }
}
