//! Persistence
//!
//! Each store saves and loads its whole collection through an injected
//! [`RecordSerializer`]. Formats are interchangeable; every one writes the same
//! tagged envelope (`kind` + ordered `records`) and round-trips every field.

mod binary;
mod contract;
mod file;
mod json;
mod yaml;

pub use binary::BincodeSerializer;
pub use contract::RecordSerializer;
pub use json::JsonSerializer;
pub use yaml::YamlSerializer;

use crate::model::Record;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Data file format selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    #[default]
    Json,
    Yaml,
    Bincode,
}

impl StorageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            StorageFormat::Json => "json",
            StorageFormat::Yaml => "yaml",
            StorageFormat::Bincode => "bin",
        }
    }

    /// Build the serializer for one collection's data file.
    pub fn serializer_for<T: Record>(
        self,
        path: impl Into<PathBuf>,
    ) -> Box<dyn RecordSerializer<T>> {
        match self {
            StorageFormat::Json => Box::new(JsonSerializer::new(path)),
            StorageFormat::Yaml => Box::new(YamlSerializer::new(path)),
            StorageFormat::Bincode => Box::new(BincodeSerializer::new(path)),
        }
    }
}

impl std::fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageFormat::Json => write!(f, "json"),
            StorageFormat::Yaml => write!(f, "yaml"),
            StorageFormat::Bincode => write!(f, "bincode"),
        }
    }
}
