//! Ordered, id-assigning record table shared by the aircraft and airline stores.

use crate::error::PersistenceError;
use crate::model::Identified;
use crate::persistence::RecordSerializer;
use crate::types::RecordId;

/// In-memory collection plus its persistence binding.
///
/// Insertion order is display order. Update and delete address records by
/// positional index; `find_by_id` exists for cross-store lookups.
pub struct RecordTable<T: Identified> {
    records: Vec<T>,
    next_id: RecordId,
    /// Set once `RecordId::MAX` has been handed out.
    exhausted: bool,
    serializer: Box<dyn RecordSerializer<T>>,
}

impl<T: Identified> RecordTable<T> {
    pub fn new(serializer: Box<dyn RecordSerializer<T>>) -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
            exhausted: false,
            serializer,
        }
    }

    /// Assign the next id and append. Returns the assigned id.
    ///
    /// Ids increase by one per add. Once `RecordId::MAX` has been assigned the
    /// counter cannot advance, and later adds take the lowest id not in use.
    pub fn add(&mut self, mut record: T) -> RecordId {
        let id = if self.exhausted {
            self.lowest_free_id()
        } else {
            let id = self.next_id;
            match id.checked_add(1) {
                Some(next) => self.next_id = next,
                None => {
                    tracing::warn!(kind = T::KIND, "record id counter exhausted");
                    self.exhausted = true;
                }
            }
            id
        };
        record.assign_id(id);
        self.records.push(record);
        tracing::debug!(kind = T::KIND, id, "record added");
        id
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.records.len()
    }

    pub fn find_by_index(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    /// Linear scan by id.
    pub fn find_by_id(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Overwrite every mutable field of the record at `index`. The id is kept.
    pub fn update(&mut self, index: usize, values: T) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.overwrite_from(values);
                tracing::debug!(kind = T::KIND, index, id = record.id(), "record updated");
                true
            }
            None => false,
        }
    }

    /// Remove the record at `index`; later records shift down by one.
    pub fn delete(&mut self, index: usize) -> Option<T> {
        if !self.is_valid_index(index) {
            return None;
        }
        let removed = self.records.remove(index);
        tracing::debug!(kind = T::KIND, index, id = removed.id(), "record deleted");
        Some(removed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn find_by_iata_code(&self, code: &str) -> Vec<&T> {
        self.filter(|r| r.iata_code() == code)
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> RecordId {
        if self.exhausted {
            self.lowest_free_id()
        } else {
            self.next_id
        }
    }

    // Fewer than 2^32 records can be held, so a gap always exists.
    fn lowest_free_id(&self) -> RecordId {
        let mut used: Vec<RecordId> = self.records.iter().map(|r| r.id()).collect();
        used.sort_unstable();
        used.dedup();
        used.iter()
            .zip(0..)
            .find(|(used, candidate)| **used != *candidate)
            .map(|(_, candidate)| candidate)
            .unwrap_or(used.len() as RecordId)
    }

    /// Replace the collection from the backing file.
    ///
    /// The counter is re-derived as `max(id) + 1`, or 0 for an empty file. A
    /// file already holding `RecordId::MAX` leaves the counter exhausted.
    /// On failure the in-memory collection is left as it was.
    pub fn load(&mut self) -> Result<(), PersistenceError> {
        let records = self.serializer.read()?;
        let (next_id, exhausted) = match records.iter().map(|r| r.id()).max() {
            None => (0, false),
            Some(max) => match max.checked_add(1) {
                Some(next) => (next, false),
                None => {
                    tracing::warn!(
                        kind = T::KIND,
                        path = %self.serializer.location().display(),
                        "loaded record holds the highest possible id; reusing free ids"
                    );
                    (max, true)
                }
            },
        };
        self.next_id = next_id;
        self.exhausted = exhausted;
        self.records = records;
        tracing::info!(
            kind = T::KIND,
            count = self.records.len(),
            path = %self.serializer.location().display(),
            "collection loaded"
        );
        Ok(())
    }

    /// Flush the whole collection to the backing file.
    pub fn store(&self) -> Result<(), PersistenceError> {
        self.serializer.write(&self.records)?;
        tracing::info!(
            kind = T::KIND,
            count = self.records.len(),
            path = %self.serializer.location().display(),
            "collection stored"
        );
        Ok(())
    }

    pub fn location(&self) -> &std::path::Path {
        self.serializer.location()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{Aircraft, Record};
    use parking_lot::Mutex;
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    /// Serializer keeping the "file" in memory; can be told to fail reads.
    pub(crate) struct MemorySerializer<T> {
        pub data: Arc<Mutex<Option<Vec<T>>>>,
        pub fail_reads: bool,
        path: PathBuf,
    }

    impl<T> MemorySerializer<T> {
        pub fn new() -> Self {
            Self {
                data: Arc::new(Mutex::new(None)),
                fail_reads: false,
                path: PathBuf::from("memory"),
            }
        }

        pub fn sharing(data: Arc<Mutex<Option<Vec<T>>>>) -> Self {
            Self {
                data,
                fail_reads: false,
                path: PathBuf::from("memory"),
            }
        }
    }

    impl<T: Record> RecordSerializer<T> for MemorySerializer<T> {
        fn write(&self, records: &[T]) -> Result<(), PersistenceError> {
            *self.data.lock() = Some(records.to_vec());
            Ok(())
        }

        fn read(&self) -> Result<Vec<T>, PersistenceError> {
            if self.fail_reads {
                return Err(PersistenceError::KindMismatch {
                    expected: T::KIND.to_string(),
                    found: "garbage".to_string(),
                });
            }
            self.data
                .lock()
                .clone()
                .ok_or_else(|| PersistenceError::NotFound(self.path.clone()))
        }

        fn location(&self) -> &Path {
            &self.path
        }
    }

    fn sample(model: &str) -> Aircraft {
        Aircraft::new("320", "Airbus", model, 180, 3300, 1988, true)
    }

    fn table() -> RecordTable<Aircraft> {
        RecordTable::new(Box::new(MemorySerializer::<Aircraft>::new()))
    }

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let mut table = table();
        assert_eq!(table.add(sample("A")), 0);
        assert_eq!(table.add(sample("B")), 1);
        table.delete(0);
        assert_eq!(table.add(sample("C")), 2);
    }

    #[test]
    fn test_delete_shifts_later_records() {
        let mut table = table();
        table.add(sample("A"));
        table.add(sample("B"));
        table.add(sample("C"));

        let removed = table.delete(1).unwrap();
        assert_eq!(removed.model, "B");
        assert_eq!(table.count(), 2);
        assert_eq!(table.find_by_index(1).unwrap().model, "C");
        assert!(!table.is_valid_index(2));
        assert!(table.delete(2).is_none());
    }

    #[test]
    fn test_update_invalid_index_fails() {
        let mut table = table();
        assert!(!table.update(0, sample("X")));
        table.add(sample("A"));
        assert!(!table.update(1, sample("X")));
        assert_eq!(table.find_by_index(0).unwrap().model, "A");
    }

    #[test]
    fn test_failed_load_keeps_collection() {
        let mut serializer = MemorySerializer::<Aircraft>::new();
        serializer.fail_reads = true;
        let mut table: RecordTable<Aircraft> = RecordTable::new(Box::new(serializer));
        table.add(sample("A"));

        assert!(table.load().is_err());
        assert_eq!(table.count(), 1);
        assert_eq!(table.next_id(), 1);
    }

    #[test]
    fn test_load_recomputes_counter_from_max_id() {
        let data: Arc<Mutex<Option<Vec<Aircraft>>>> = Arc::new(Mutex::new(None));
        let mut writer: RecordTable<Aircraft> =
            RecordTable::new(Box::new(MemorySerializer::sharing(data.clone())));
        for model in ["A", "B", "C"] {
            writer.add(sample(model));
        }
        // Dropping the highest id lowers the next id after reload.
        writer.delete(2);
        writer.store().unwrap();

        let mut reader: RecordTable<Aircraft> =
            RecordTable::new(Box::new(MemorySerializer::sharing(data.clone())));
        reader.load().unwrap();
        assert_eq!(reader.next_id(), 2);
        assert_eq!(reader.add(sample("D")), 2);

        *data.lock() = Some(Vec::new());
        reader.load().unwrap();
        assert_eq!(reader.count(), 0);
        assert_eq!(reader.add(sample("E")), 0);
    }

    #[test]
    fn test_highest_id_on_disk_does_not_repeat_ids() {
        let mut top = sample("Top");
        top.assign_id(RecordId::MAX);
        let mut low = sample("Low");
        low.assign_id(0);
        let data = Arc::new(Mutex::new(Some(vec![low, top])));

        let mut table: RecordTable<Aircraft> =
            RecordTable::new(Box::new(MemorySerializer::sharing(data)));
        table.load().unwrap();
        assert_eq!(table.next_id(), 1);
        assert_eq!(table.add(sample("A")), 1);
        assert_eq!(table.add(sample("B")), 2);

        let mut ids: Vec<RecordId> = table.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), table.count());
    }

    #[test]
    fn test_counter_reaching_max_switches_to_free_ids() {
        let mut top = sample("Top");
        top.assign_id(RecordId::MAX - 1);
        let data = Arc::new(Mutex::new(Some(vec![top])));

        let mut table: RecordTable<Aircraft> =
            RecordTable::new(Box::new(MemorySerializer::sharing(data)));
        table.load().unwrap();
        assert_eq!(table.add(sample("A")), RecordId::MAX);
        assert_eq!(table.add(sample("B")), 0);
        assert_eq!(table.add(sample("C")), 1);
    }

    proptest! {
        #[test]
        fn ids_strictly_increase_without_load(
            ops in prop::collection::vec(prop_oneof![Just(None), (0usize..8).prop_map(Some)], 1..60)
        ) {
            let mut table = table();
            let mut assigned = Vec::new();
            for op in ops {
                match op {
                    None => assigned.push(table.add(sample("P"))),
                    Some(index) => {
                        table.delete(index);
                    }
                }
            }
            let expected: Vec<RecordId> = (0..assigned.len() as RecordId).collect();
            prop_assert_eq!(assigned, expected);
        }

        #[test]
        fn delete_moves_next_record_into_place(len in 1usize..20, pick in 0usize..20) {
            let mut table = table();
            for i in 0..len {
                table.add(sample(&i.to_string()));
            }
            let index = pick % len;
            let following = table.find_by_index(index + 1).map(|a| a.id);
            prop_assert!(table.delete(index).is_some());
            prop_assert_eq!(table.count(), len - 1);
            prop_assert_eq!(table.find_by_index(index).map(|a| a.id), following);
        }

        #[test]
        fn update_never_changes_id(
            len in 1usize..10,
            pick in 0usize..10,
            bogus_id in any::<u32>(),
        ) {
            let mut table = table();
            for i in 0..len {
                table.add(sample(&i.to_string()));
            }
            let index = pick % len;
            let before = table.find_by_index(index).unwrap().id;
            let mut values = sample("updated");
            values.id = bogus_id;
            prop_assert!(table.update(index, values));
            let after = table.find_by_index(index).unwrap();
            prop_assert_eq!(after.id, before);
            prop_assert_eq!(after.model.as_str(), "updated");
        }
    }
}
