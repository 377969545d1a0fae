//! Error types
//!
//! Lookups that find nothing are not errors: stores return `Option`/`bool`.
//! Only persistence, configuration and user input failures travel as `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a [`RecordSerializer`](crate::persistence::RecordSerializer) read or write.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Data file not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Binary encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Data file holds '{found}' records, expected '{expected}'")]
    KindMismatch { expected: String, found: String },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors surfaced by the application and CLI layers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
