use super::contract::{RecordFile, RecordFileRef, RecordSerializer};
use super::file::{open_for_read, replace_with};
use crate::error::PersistenceError;
use crate::model::Record;
use std::path::{Path, PathBuf};

/// Compact bincode data file. Not human-diffable; fastest to load.
pub struct BincodeSerializer {
    path: PathBuf,
}

impl BincodeSerializer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T: Record> RecordSerializer<T> for BincodeSerializer {
    fn write(&self, records: &[T]) -> Result<(), PersistenceError> {
        replace_with(&self.path, |writer| {
            bincode::serialize_into(writer, &RecordFileRef::new(records))?;
            Ok(())
        })
    }

    fn read(&self) -> Result<Vec<T>, PersistenceError> {
        let reader = open_for_read(&self.path)?;
        let file: RecordFile<T> = bincode::deserialize_from(reader)?;
        file.into_records()
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
