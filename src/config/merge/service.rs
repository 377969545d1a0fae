//! MergeService: orchestrates sources, applies merge policy, deserializes to FleetConfig.

use super::policy;
use crate::config::sources::{environment, global_file, local_file};
use crate::config::FleetConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence, lowest first: defaults, global file, `<dir>/fleetmaster.toml`,
    /// environment.
    pub fn load(dir: &Path) -> Result<FleetConfig, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, dir)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load an explicit file (required) with the environment overlay.
    pub fn load_from_file(path: &Path) -> Result<FleetConfig, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
