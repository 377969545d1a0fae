use super::{Identified, Record};
use crate::types::{RecordId, Year};
use serde::{Deserialize, Serialize};

/// One aircraft type (not a physical airframe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: RecordId,
    /// Type code, e.g. "320". Not unique across records.
    pub iata_code: String,
    pub manufacturer: String,
    pub model: String,
    /// Seats
    pub capacity: u32,
    /// Nautical miles
    pub range_nm: u32,
    pub year_introduced: Year,
    pub in_production: bool,
}

impl Aircraft {
    /// Build an aircraft awaiting id assignment by its store.
    pub fn new(
        iata_code: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        capacity: u32,
        range_nm: u32,
        year_introduced: Year,
        in_production: bool,
    ) -> Self {
        Self {
            id: 0,
            iata_code: iata_code.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
            capacity,
            range_nm,
            year_introduced,
            in_production,
        }
    }
}

impl Record for Aircraft {
    const KIND: &'static str = "aircraft";
}

impl Identified for Aircraft {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn overwrite_from(&mut self, other: Self) {
        self.iata_code = other.iata_code;
        self.manufacturer = other.manufacturer;
        self.model = other.model;
        self.capacity = other.capacity;
        self.range_nm = other.range_nm;
        self.year_introduced = other.year_introduced;
        self.in_production = other.in_production;
    }

    fn iata_code(&self) -> &str {
        &self.iata_code
    }
}
