//! PlateKit Settings Crate
//!
//! Machine geometry, print-head clearance and brim/skirt margins consumed by
//! the layout engine, with JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{default_config_path, HeadSettings, LayoutConfig, MachineSettings, SizeOffsets};
pub use error::{ConfigError, SettingsError, SettingsResult};
