use crate::error::PersistenceError;
use crate::model::{FleetDetails, FleetEntry};
use crate::persistence::RecordSerializer;
use crate::report::revenue::{rank_by_lifetime_revenue, RankedFleetEntry};
use crate::store::AircraftStore;
use crate::types::{RecordId, Year};

/// Store of airline-to-aircraft assignments.
///
/// Entries have no synthetic id. Update and delete address the first entry
/// matching `(airline_id, aircraft_id)` in insertion order; duplicate pairs are
/// allowed and later duplicates are only reachable once earlier ones are gone.
pub struct FleetStore {
    entries: Vec<FleetEntry>,
    serializer: Box<dyn RecordSerializer<FleetEntry>>,
}

impl FleetStore {
    pub fn new(serializer: Box<dyn RecordSerializer<FleetEntry>>) -> Self {
        Self {
            entries: Vec::new(),
            serializer,
        }
    }

    /// Append without checking for an existing `(airline_id, aircraft_id)` pair.
    pub fn add(&mut self, entry: FleetEntry) {
        tracing::debug!(
            airline_id = entry.airline_id,
            aircraft_id = entry.aircraft_id,
            registration = %entry.registration,
            "fleet entry added"
        );
        self.entries.push(entry);
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn list_all(&self) -> std::slice::Iter<'_, FleetEntry> {
        self.entries.iter()
    }

    pub fn count_for_airline(&self, airline_id: RecordId) -> usize {
        self.entries
            .iter()
            .filter(|e| e.airline_id == airline_id)
            .count()
    }

    pub fn list_for_airline(&self, airline_id: RecordId) -> Vec<&FleetEntry> {
        self.entries
            .iter()
            .filter(|e| e.airline_id == airline_id)
            .collect()
    }

    /// First entry carrying `registration`.
    pub fn find_by_registration(&self, registration: &str) -> Option<&FleetEntry> {
        self.entries.iter().find(|e| e.registration == registration)
    }

    fn position_of(&self, airline_id: RecordId, aircraft_id: RecordId) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.matches_key(airline_id, aircraft_id))
    }

    pub fn update(
        &mut self,
        airline_id: RecordId,
        aircraft_id: RecordId,
        details: FleetDetails,
    ) -> bool {
        match self.position_of(airline_id, aircraft_id) {
            Some(index) => {
                self.entries[index].apply(details);
                tracing::debug!(airline_id, aircraft_id, "fleet entry updated");
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, airline_id: RecordId, aircraft_id: RecordId) -> Option<FleetEntry> {
        let index = self.position_of(airline_id, aircraft_id)?;
        tracing::debug!(airline_id, aircraft_id, "fleet entry deleted");
        Some(self.entries.remove(index))
    }

    /// The airline's entries ranked by lifetime revenue as of `as_of_year`.
    pub fn top_revenue(
        &self,
        airline_id: RecordId,
        as_of_year: Year,
        aircraft: &AircraftStore,
    ) -> Vec<RankedFleetEntry> {
        rank_by_lifetime_revenue(self, aircraft, airline_id, as_of_year)
    }

    /// Replace the collection from the backing file; untouched on failure.
    pub fn load(&mut self) -> Result<(), PersistenceError> {
        let entries = self.serializer.read()?;
        self.entries = entries;
        tracing::info!(
            count = self.entries.len(),
            path = %self.serializer.location().display(),
            "fleet loaded"
        );
        Ok(())
    }

    pub fn store(&self) -> Result<(), PersistenceError> {
        self.serializer.write(&self.entries)?;
        tracing::info!(
            count = self.entries.len(),
            path = %self.serializer.location().display(),
            "fleet stored"
        );
        Ok(())
    }

    pub fn location(&self) -> &std::path::Path {
        self.serializer.location()
    }
}
