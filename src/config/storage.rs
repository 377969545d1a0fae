//! StorageConfig and resolution of the three data file paths.

use super::paths;
use crate::error::ApiError;
use crate::persistence::StorageFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the data files; platform data directory when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Data file format: json, yaml or bincode
    #[serde(default)]
    pub format: StorageFormat,

    /// File names relative to `data_dir` (absolute paths are used as given).
    /// Default to `aircraft.<ext>`, `airlines.<ext>` and `fleet.<ext>`.
    #[serde(default)]
    pub aircraft_file: Option<PathBuf>,

    #[serde(default)]
    pub airlines_file: Option<PathBuf>,

    #[serde(default)]
    pub fleet_file: Option<PathBuf>,
}

/// Backing file of each store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub aircraft: PathBuf,
    pub airlines: PathBuf,
    pub fleet: PathBuf,
}

impl StorageConfig {
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ApiError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => paths::default_data_dir(),
        }
    }

    /// Resolve the store files to actual filesystem locations.
    pub fn resolve_paths(&self) -> Result<StorePaths, ApiError> {
        let data_dir = self.resolve_data_dir()?;
        let ext = self.format.extension();
        let resolve = |configured: &Option<PathBuf>, stem: &str| match configured {
            Some(file) => data_dir.join(file),
            None => data_dir.join(format!("{}.{}", stem, ext)),
        };
        Ok(StorePaths {
            aircraft: resolve(&self.aircraft_file, "aircraft"),
            airlines: resolve(&self.airlines_file, "airlines"),
            fleet: resolve(&self.fleet_file, "fleet"),
        })
    }

    pub(crate) fn validate(&self) -> Result<(), ApiError> {
        let files = [
            ("aircraft_file", &self.aircraft_file),
            ("airlines_file", &self.airlines_file),
            ("fleet_file", &self.fleet_file),
        ];
        for (key, file) in files {
            if matches!(file, Some(path) if path.as_os_str().is_empty()) {
                return Err(ApiError::ConfigError(format!(
                    "storage.{} must not be empty",
                    key
                )));
            }
        }
        let mut named: Vec<&PathBuf> = files.iter().filter_map(|(_, f)| f.as_ref()).collect();
        named.sort();
        if named.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(ApiError::ConfigError(
                "storage file names must differ between collections".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_follow_format() {
        let config = StorageConfig {
            data_dir: Some(PathBuf::from("/data")),
            format: StorageFormat::Bincode,
            ..Default::default()
        };
        let paths = config.resolve_paths().unwrap();
        assert_eq!(paths.aircraft, PathBuf::from("/data/aircraft.bin"));
        assert_eq!(paths.airlines, PathBuf::from("/data/airlines.bin"));
        assert_eq!(paths.fleet, PathBuf::from("/data/fleet.bin"));
    }

    #[test]
    fn test_configured_names_and_absolute_paths() {
        let config = StorageConfig {
            data_dir: Some(PathBuf::from("/data")),
            aircraft_file: Some(PathBuf::from("types.json")),
            fleet_file: Some(PathBuf::from("/elsewhere/fleet.json")),
            ..Default::default()
        };
        let paths = config.resolve_paths().unwrap();
        assert_eq!(paths.aircraft, PathBuf::from("/data/types.json"));
        assert_eq!(paths.airlines, PathBuf::from("/data/airlines.json"));
        assert_eq!(paths.fleet, PathBuf::from("/elsewhere/fleet.json"));
    }

    #[test]
    fn test_duplicate_file_names_rejected() {
        let config = StorageConfig {
            aircraft_file: Some(PathBuf::from("all.json")),
            airlines_file: Some(PathBuf::from("all.json")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
