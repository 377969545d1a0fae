use super::Record;
use crate::types::{RecordId, Year};
use serde::{Deserialize, Serialize};

/// Assignment of an aircraft type to an airline.
///
/// Identified for update/delete by the natural key `(airline_id, aircraft_id)`.
/// Neither id is checked against the other stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetEntry {
    pub airline_id: RecordId,
    pub aircraft_id: RecordId,
    /// Tail number, e.g. "EI-DEE". Not required to be unique.
    pub registration: String,
    pub year_bought: Year,
    pub hours_flown: u32,
    /// Millions per year
    pub revenue_per_year: f64,
    pub is_retired: bool,
}

/// The mutable part of a [`FleetEntry`].
#[derive(Debug, Clone, PartialEq)]
pub struct FleetDetails {
    pub registration: String,
    pub year_bought: Year,
    pub hours_flown: u32,
    pub revenue_per_year: f64,
    pub is_retired: bool,
}

impl FleetEntry {
    pub fn new(airline_id: RecordId, aircraft_id: RecordId, details: FleetDetails) -> Self {
        Self {
            airline_id,
            aircraft_id,
            registration: details.registration,
            year_bought: details.year_bought,
            hours_flown: details.hours_flown,
            revenue_per_year: details.revenue_per_year,
            is_retired: details.is_retired,
        }
    }

    pub fn matches_key(&self, airline_id: RecordId, aircraft_id: RecordId) -> bool {
        self.airline_id == airline_id && self.aircraft_id == aircraft_id
    }

    /// Overwrite the mutable fields; the natural key is never changed.
    pub fn apply(&mut self, details: FleetDetails) {
        self.registration = details.registration;
        self.year_bought = details.year_bought;
        self.hours_flown = details.hours_flown;
        self.revenue_per_year = details.revenue_per_year;
        self.is_retired = details.is_retired;
    }

    /// Whole years in the fleet as of `as_of_year`, counting the purchase year.
    pub fn years_in_fleet(&self, as_of_year: Year) -> i64 {
        i64::from(as_of_year) - i64::from(self.year_bought) + 1
    }

    /// Lifetime revenue score used to rank a fleet.
    pub fn lifetime_revenue(&self, as_of_year: Year) -> f64 {
        self.years_in_fleet(as_of_year) as f64 * self.revenue_per_year
    }
}

impl Record for FleetEntry {
    const KIND: &'static str = "fleet";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(year_bought: Year, revenue: f64) -> FleetDetails {
        FleetDetails {
            registration: "EI-ABC".to_string(),
            year_bought,
            hours_flown: 12000,
            revenue_per_year: revenue,
            is_retired: false,
        }
    }

    #[test]
    fn test_lifetime_revenue_counts_purchase_year() {
        let entry = FleetEntry::new(1, 101, details(2010, 5.5));
        assert_eq!(entry.years_in_fleet(2010), 1);
        assert_eq!(entry.years_in_fleet(2019), 10);
        assert!((entry.lifetime_revenue(2019) - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_keeps_natural_key() {
        let mut entry = FleetEntry::new(1, 101, details(2010, 5.5));
        entry.apply(FleetDetails {
            registration: "EI-NEW".to_string(),
            year_bought: 2012,
            hours_flown: 15000,
            revenue_per_year: 6.0,
            is_retired: true,
        });
        assert!(entry.matches_key(1, 101));
        assert_eq!(entry.registration, "EI-NEW");
        assert_eq!(entry.hours_flown, 15000);
        assert!(entry.is_retired);
    }
}
