//! Shared access to the stores for multiple callers
//!
//! Each store sits behind its own mutex, so a store's collection and id
//! counter are always updated together. Callers that need more than one store
//! at a time lock them in the order fleet, aircraft, airline.

use crate::app::FleetManager;
use crate::error::PersistenceError;
use crate::report::RevenueReport;
use crate::store::{AircraftStore, AirlineStore, FleetStore};
use crate::types::{RecordId, Year};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable handle to the three stores.
#[derive(Clone)]
pub struct SharedFleet {
    fleet: Arc<Mutex<FleetStore>>,
    aircraft: Arc<Mutex<AircraftStore>>,
    airlines: Arc<Mutex<AirlineStore>>,
}

impl SharedFleet {
    pub fn new(manager: FleetManager) -> Self {
        let FleetManager {
            aircraft,
            airlines,
            fleet,
        } = manager;
        Self {
            fleet: Arc::new(Mutex::new(fleet)),
            aircraft: Arc::new(Mutex::new(aircraft)),
            airlines: Arc::new(Mutex::new(airlines)),
        }
    }

    pub fn fleet(&self) -> MutexGuard<'_, FleetStore> {
        self.fleet.lock()
    }

    pub fn aircraft(&self) -> MutexGuard<'_, AircraftStore> {
        self.aircraft.lock()
    }

    pub fn airlines(&self) -> MutexGuard<'_, AirlineStore> {
        self.airlines.lock()
    }

    /// Holds all three locks for the duration of the join.
    pub fn revenue_report(&self, airline_id: RecordId, as_of_year: Year) -> RevenueReport {
        let fleet = self.fleet.lock();
        let aircraft = self.aircraft.lock();
        let airlines = self.airlines.lock();
        RevenueReport::build(&fleet, &aircraft, &airlines, airline_id, as_of_year)
    }

    pub fn can_manage_fleet(&self) -> bool {
        let aircraft = self.aircraft.lock().count();
        aircraft > 0 && self.airlines.lock().count() > 0
    }

    /// Stores are saved one at a time; no two locks are held together.
    pub fn save_all(&self) -> Result<(), PersistenceError> {
        self.airlines.lock().store()?;
        self.aircraft.lock().store()?;
        self.fleet.lock().store()?;
        Ok(())
    }

    pub fn load_all(&self) -> Result<(), PersistenceError> {
        self.airlines.lock().load()?;
        self.aircraft.lock().load()?;
        self.fleet.lock().load()?;
        Ok(())
    }
}
