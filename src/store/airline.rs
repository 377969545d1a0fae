use super::table::RecordTable;
use crate::error::PersistenceError;
use crate::model::Airline;
use crate::persistence::RecordSerializer;
use crate::types::{RecordId, Year};

/// Store of airline operators.
pub struct AirlineStore {
    table: RecordTable<Airline>,
}

impl AirlineStore {
    pub fn new(serializer: Box<dyn RecordSerializer<Airline>>) -> Self {
        Self {
            table: RecordTable::new(serializer),
        }
    }

    pub fn add(&mut self, airline: Airline) -> RecordId {
        self.table.add(airline)
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }

    pub fn is_valid_index(&self, index: usize) -> bool {
        self.table.is_valid_index(index)
    }

    pub fn find_by_index(&self, index: usize) -> Option<&Airline> {
        self.table.find_by_index(index)
    }

    pub fn find_by_id(&self, id: RecordId) -> Option<&Airline> {
        self.table.find_by_id(id)
    }

    pub fn update(&mut self, index: usize, values: Airline) -> bool {
        self.table.update(index, values)
    }

    pub fn delete(&mut self, index: usize) -> Option<Airline> {
        self.table.delete(index)
    }

    pub fn list_all(&self) -> std::slice::Iter<'_, Airline> {
        self.table.iter()
    }

    pub fn find_by_iata_code(&self, code: &str) -> Vec<&Airline> {
        self.table.find_by_iata_code(code)
    }

    pub fn filter_active(&self) -> Vec<&Airline> {
        self.table.filter(|a| a.is_active)
    }

    /// Airlines with `year_founded < year`, insertion order.
    pub fn filter_founded_before(&self, year: Year) -> Vec<&Airline> {
        self.table.filter(|a| a.year_founded < year)
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

    pub(crate) fn as_slice(&self) -> &[Airline] {
        self.table.as_slice()
    }
}
