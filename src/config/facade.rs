//! ConfigLoader facade delegating to merge service.

use super::merge::MergeService;
use super::FleetConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the standard files and the environment.
    pub fn load(dir: &Path) -> Result<FleetConfig, ConfigError> {
        MergeService::load(dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<FleetConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> FleetConfig {
        FleetConfig::default()
    }
}
