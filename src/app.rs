//! FleetManager: the three stores constructed once and handed to callers.

use crate::config::StorePaths;
use crate::error::PersistenceError;
use crate::persistence::StorageFormat;
use crate::report::RevenueReport;
use crate::store::{AircraftStore, AirlineStore, FleetStore};
use crate::types::{RecordId, Year};

/// Owner of the aircraft, airline and fleet stores.
///
/// Stores are independent: loading or saving walks them one at a time with no
/// transaction across the three files.
pub struct FleetManager {
    pub aircraft: AircraftStore,
    pub airlines: AirlineStore,
    pub fleet: FleetStore,
}

impl FleetManager {
    pub fn new(aircraft: AircraftStore, airlines: AirlineStore, fleet: FleetStore) -> Self {
        Self {
            aircraft,
            airlines,
            fleet,
        }
    }

    /// Bind each store to its data file in `format`.
    pub fn open(paths: &StorePaths, format: StorageFormat) -> Self {
        tracing::debug!(
            format = %format,
            aircraft = %paths.aircraft.display(),
            airlines = %paths.airlines.display(),
            fleet = %paths.fleet.display(),
            "opening stores"
        );
        Self::new(
            AircraftStore::new(format.serializer_for(&paths.aircraft)),
            AirlineStore::new(format.serializer_for(&paths.airlines)),
            FleetStore::new(format.serializer_for(&paths.fleet)),
        )
    }

    /// Load airlines, aircraft, then fleet. Stops at the first failure; stores
    /// loaded before it keep their new contents.
    pub fn load_all(&mut self) -> Result<(), PersistenceError> {
        self.airlines.load()?;
        self.aircraft.load()?;
        self.fleet.load()?;
        Ok(())
    }

    /// Save airlines, aircraft, then fleet, stopping at the first failure.
    pub fn save_all(&self) -> Result<(), PersistenceError> {
        self.airlines.store()?;
        self.aircraft.store()?;
        self.fleet.store()?;
        Ok(())
    }

    /// Like [`load_all`](Self::load_all) but a missing data file leaves that
    /// store empty instead of failing. Returns how many stores were loaded.
    pub fn load_existing(&mut self) -> Result<usize, PersistenceError> {
        let mut loaded = 0;
        loaded += skip_missing("airlines", self.airlines.load())?;
        loaded += skip_missing("aircraft", self.aircraft.load())?;
        loaded += skip_missing("fleet", self.fleet.load())?;
        Ok(loaded)
    }

    /// Fleet add/update/delete need at least one airline and one aircraft.
    pub fn can_manage_fleet(&self) -> bool {
        self.airlines.count() > 0 && self.aircraft.count() > 0
    }

    pub fn revenue_report(&self, airline_id: RecordId, as_of_year: Year) -> RevenueReport {
        RevenueReport::build(
            &self.fleet,
            &self.aircraft,
            &self.airlines,
            airline_id,
            as_of_year,
        )
    }
}

fn skip_missing(
    store: &str,
    result: Result<(), PersistenceError>,
) -> Result<usize, PersistenceError> {
    match result {
        Ok(()) => Ok(1),
        Err(PersistenceError::NotFound(path)) => {
            tracing::info!(store, path = %path.display(), "no data file yet, starting empty");
            Ok(0)
        }
        Err(e) => Err(e),
    }
}
