use super::contract::{RecordFile, RecordFileRef, RecordSerializer};
use super::file::{open_for_read, replace_with};
use crate::error::PersistenceError;
use crate::model::Record;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Pretty-printed JSON data file.
pub struct JsonSerializer {
    path: PathBuf,
}

impl JsonSerializer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T: Record> RecordSerializer<T> for JsonSerializer {
    /// serde_json writes non-finite floats as `null`, which cannot be read
    /// back. The encoded bytes are parsed again before the file is touched so
    /// such a collection is rejected instead of saved.
    fn write(&self, records: &[T]) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(&RecordFileRef::new(records))?;
        serde_json::from_slice::<RecordFile<T>>(&bytes)?;
        replace_with(&self.path, |writer| {
            writer
                .write_all(&bytes)
                .map_err(|e| PersistenceError::io(&self.path, e))
        })
    }

    fn read(&self) -> Result<Vec<T>, PersistenceError> {
        let reader = open_for_read(&self.path)?;
        let file: RecordFile<T> = serde_json::from_reader(reader)?;
        file.into_records()
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
