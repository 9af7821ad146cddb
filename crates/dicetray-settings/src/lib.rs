//! Configuration and settings management for dicetray
//!
//! Provides configuration file handling and validation for the tray
//! design, foot cuts and output artifacts.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, OutputSettings};
pub use error::{SettingsError, SettingsResult};
