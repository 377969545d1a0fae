use crate::error::PersistenceError;
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Whole-collection persistence for one record kind.
///
/// `write` replaces any prior content at the target; `read` returns the
/// collection in the order it was written.
pub trait RecordSerializer<T: Record>: Send + Sync {
    fn write(&self, records: &[T]) -> Result<(), PersistenceError>;
    fn read(&self) -> Result<Vec<T>, PersistenceError>;
    /// Backing location, for logs and messages.
    fn location(&self) -> &Path;
}

/// On-disk envelope written by every format.
#[derive(Debug, Serialize)]
pub(crate) struct RecordFileRef<'a, T> {
    pub kind: &'a str,
    pub records: &'a [T],
}

impl<'a, T: Record> RecordFileRef<'a, T> {
    pub fn new(records: &'a [T]) -> Self {
        Self {
            kind: T::KIND,
            records,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordFile<T> {
    pub kind: String,
    pub records: Vec<T>,
}

impl<T: Record> RecordFile<T> {
    pub fn into_records(self) -> Result<Vec<T>, PersistenceError> {
        if self.kind != T::KIND {
            return Err(PersistenceError::KindMismatch {
                expected: T::KIND.to_string(),
                found: self.kind,
            });
        }
        Ok(self.records)
    }
}
