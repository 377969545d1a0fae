use super::contract::{RecordFile, RecordFileRef, RecordSerializer};
use super::file::{open_for_read, replace_with};
use crate::error::PersistenceError;
use crate::model::Record;
use std::path::{Path, PathBuf};

/// YAML data file; one mapping per record, fields in declaration order.
pub struct YamlSerializer {
    path: PathBuf,
}

impl YamlSerializer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T: Record> RecordSerializer<T> for YamlSerializer {
    fn write(&self, records: &[T]) -> Result<(), PersistenceError> {
        replace_with(&self.path, |writer| {
            serde_yaml::to_writer(writer, &RecordFileRef::new(records))?;
            Ok(())
        })
    }

    fn read(&self) -> Result<Vec<T>, PersistenceError> {
        let reader = open_for_read(&self.path)?;
        let file: RecordFile<T> = serde_yaml::from_reader(reader)?;
        file.into_records()
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
