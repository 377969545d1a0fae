//! Environment overlay: `FLEETMASTER__<SECTION>__<KEY>`.
//!
//! The double underscore after the prefix keeps the logging variables
//! (`FLEETMASTER_LOG`, `FLEETMASTER_LOG_FORMAT`, ...) out of the file-backed
//! configuration; those are read by the logging layer at startup.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, Map};

const PREFIX: &str = "FLEETMASTER";
const SEPARATOR: &str = "__";

fn overlay(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(PREFIX)
        .prefix_separator(SEPARATOR)
        .separator(SEPARATOR)
        .try_parsing(true)
        .source(vars)
}

/// `FLEETMASTER__STORAGE__FORMAT=yaml` sets `storage.format`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(overlay(None)))
}
