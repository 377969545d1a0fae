//! Top-revenue fleet ranking.
//!
//! Joins an airline's fleet entries against the aircraft store by id. Ids that
//! do not resolve are reported with an explicit unknown marker.

use crate::model::{Aircraft, Airline, FleetEntry};
use crate::store::{AircraftStore, AirlineStore, FleetStore};
use crate::types::{RecordId, Year};
use serde::Serialize;

/// Aircraft attributes attached to a ranked row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AircraftDetails {
    Known {
        aircraft_id: RecordId,
        manufacturer: String,
        model: String,
        capacity: u32,
        range_nm: u32,
    },
    Unknown { aircraft_id: RecordId },
}

impl AircraftDetails {
    fn resolve(aircraft_id: RecordId, aircraft: &AircraftStore) -> Self {
        match aircraft.find_by_id(aircraft_id) {
            Some(found) => Self::from(found),
            None => AircraftDetails::Unknown { aircraft_id },
        }
    }

    /// "Manufacturer Model", or a marker naming the unresolved id.
    pub fn label(&self) -> String {
        match self {
            AircraftDetails::Known {
                manufacturer,
                model,
                ..
            } => format!("{} {}", manufacturer, model),
            AircraftDetails::Unknown { aircraft_id } => {
                format!("unknown aircraft (id {})", aircraft_id)
            }
        }
    }
}

impl From<&Aircraft> for AircraftDetails {
    fn from(aircraft: &Aircraft) -> Self {
        AircraftDetails::Known {
            aircraft_id: aircraft.id,
            manufacturer: aircraft.manufacturer.clone(),
            model: aircraft.model.clone(),
            capacity: aircraft.capacity,
            range_nm: aircraft.range_nm,
        }
    }
}

/// Airline heading of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AirlineDetails {
    Known {
        airline_id: RecordId,
        iata_code: String,
        airline_name: String,
    },
    Unknown { airline_id: RecordId },
}

impl AirlineDetails {
    fn resolve(airline_id: RecordId, airlines: &AirlineStore) -> Self {
        match airlines.find_by_id(airline_id) {
            Some(found) => Self::from(found),
            None => AirlineDetails::Unknown { airline_id },
        }
    }

    pub fn label(&self) -> String {
        match self {
            AirlineDetails::Known {
                iata_code,
                airline_name,
                ..
            } => format!("{} ({})", airline_name, iata_code),
            AirlineDetails::Unknown { airline_id } => {
                format!("unknown airline (id {})", airline_id)
            }
        }
    }
}

impl From<&Airline> for AirlineDetails {
    fn from(airline: &Airline) -> Self {
        AirlineDetails::Known {
            airline_id: airline.id,
            iata_code: airline.iata_code.clone(),
            airline_name: airline.airline_name.clone(),
        }
    }
}

/// One fleet entry with its score and resolved aircraft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFleetEntry {
    pub entry: FleetEntry,
    pub years_in_fleet: i64,
    pub lifetime_revenue: f64,
    pub aircraft: AircraftDetails,
}

/// Rank `airline_id`'s fleet by `(as_of_year - year_bought + 1) * revenue_per_year`,
/// highest first. Equal scores keep insertion order.
pub fn rank_by_lifetime_revenue(
    fleet: &FleetStore,
    aircraft: &AircraftStore,
    airline_id: RecordId,
    as_of_year: Year,
) -> Vec<RankedFleetEntry> {
    let mut ranked: Vec<RankedFleetEntry> = fleet
        .list_for_airline(airline_id)
        .into_iter()
        .map(|entry| RankedFleetEntry {
            years_in_fleet: entry.years_in_fleet(as_of_year),
            lifetime_revenue: entry.lifetime_revenue(as_of_year),
            aircraft: AircraftDetails::resolve(entry.aircraft_id, aircraft),
            entry: entry.clone(),
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.lifetime_revenue.total_cmp(&a.lifetime_revenue));
    ranked
}

/// Revenue ranking for one airline as of a given year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueReport {
    pub airline: AirlineDetails,
    pub as_of_year: Year,
    pub rows: Vec<RankedFleetEntry>,
}

impl RevenueReport {
    pub fn build(
        fleet: &FleetStore,
        aircraft: &AircraftStore,
        airlines: &AirlineStore,
        airline_id: RecordId,
        as_of_year: Year,
    ) -> Self {
        let rows = rank_by_lifetime_revenue(fleet, aircraft, airline_id, as_of_year);
        tracing::debug!(airline_id, as_of_year, rows = rows.len(), "revenue report built");
        Self {
            airline: AirlineDetails::resolve(airline_id, airlines),
            as_of_year,
            rows,
        }
    }

    pub fn total_lifetime_revenue(&self) -> f64 {
        self.rows.iter().map(|r| r.lifetime_revenue).sum()
    }
}
