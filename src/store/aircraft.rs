use super::table::RecordTable;
use crate::error::PersistenceError;
use crate::model::Aircraft;
use crate::persistence::RecordSerializer;
use crate::types::RecordId;

/// Store of aircraft types.
pub struct AircraftStore {
    table: RecordTable<Aircraft>,
}

impl AircraftStore {
    pub fn new(serializer: Box<dyn RecordSerializer<Aircraft>>) -> Self {
        Self {
            table: RecordTable::new(serializer),
        }
    }

    /// Assign the next id and append. Returns the assigned id.
    pub fn add(&mut self, aircraft: Aircraft) -> RecordId {
        self.table.add(aircraft)
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }

    pub fn is_valid_index(&self, index: usize) -> bool {
        self.table.is_valid_index(index)
    }

    /// Positional lookup into the current ordering, not by id.
    pub fn find_by_index(&self, index: usize) -> Option<&Aircraft> {
        self.table.find_by_index(index)
    }

    pub fn find_by_id(&self, id: RecordId) -> Option<&Aircraft> {
        self.table.find_by_id(id)
    }

    pub fn update(&mut self, index: usize, values: Aircraft) -> bool {
        self.table.update(index, values)
    }

    pub fn delete(&mut self, index: usize) -> Option<Aircraft> {
        self.table.delete(index)
    }

    pub fn list_all(&self) -> std::slice::Iter<'_, Aircraft> {
        self.table.iter()
    }

    pub fn find_by_iata_code(&self, code: &str) -> Vec<&Aircraft> {
        self.table.find_by_iata_code(code)
    }

    pub fn count_not_in_production(&self) -> usize {
        self.table.iter().filter(|a| !a.in_production).count()
    }

    /// Aircraft with `min <= capacity <= max`, insertion order.
    pub fn filter_by_capacity_range(&self, min: u32, max: u32) -> Vec<&Aircraft> {
        self.table.filter(|a| a.capacity >= min && a.capacity <= max)
    }

    /// Aircraft types no longer in production.
    pub fn list_retired(&self) -> Vec<&Aircraft> {
        self.table.filter(|a| !a.in_production)
    }

    pub fn next_id(&self) -> RecordId {
        self.table.next_id()
    }

    pub fn load(&mut self) -> Result<(), PersistenceError> {
        self.table.load()
    }

    pub fn store(&self) -> Result<(), PersistenceError> {
        self.table.store()
    }

    pub fn location(&self) -> &std::path::Path {
        self.table.location()
    }

    pub(crate) fn as_slice(&self) -> &[Aircraft] {
        self.table.as_slice()
    }
}
