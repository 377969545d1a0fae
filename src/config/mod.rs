//! Configuration
//!
//! Layered with the `config` crate, lowest precedence first: built-in defaults,
//! the global file `$XDG_CONFIG_HOME/fleetmaster/config.toml`, a local
//! `fleetmaster.toml`, then `FLEETMASTER__SECTION__KEY` environment variables.
//! CLI flags are applied on top by the tooling layer.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
pub mod storage;

pub use facade::ConfigLoader;
pub use storage::{StorageConfig, StorePaths};

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::types::Year;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Revenue report settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Reference year for lifetime revenue; the current year when unset
    #[serde(default)]
    pub as_of_year: Option<Year>,
}

impl ReportConfig {
    pub fn effective_as_of_year(&self) -> Year {
        self.as_of_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Effective configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl FleetConfig {
    /// Reject values that would only fail later, at first use.
    pub fn validate(&self) -> Result<(), ApiError> {
        self.storage.validate()?;
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ApiError::ConfigError(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// Render as TOML for `config show`.
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render configuration: {}", e)))
    }
}
