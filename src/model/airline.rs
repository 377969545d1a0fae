use super::{Identified, Record};
use crate::types::{RecordId, Year};
use serde::{Deserialize, Serialize};

/// One airline operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub id: RecordId,
    /// 2-letter code, e.g. "EI"
    pub iata_code: String,
    pub airline_name: String,
    pub country_of_origin: String,
    pub year_founded: Year,
    pub is_active: bool,
}

impl Airline {
    /// Build an airline awaiting id assignment by its store.
    pub fn new(
        iata_code: impl Into<String>,
        airline_name: impl Into<String>,
        country_of_origin: impl Into<String>,
        year_founded: Year,
        is_active: bool,
    ) -> Self {
        Self {
            id: 0,
            iata_code: iata_code.into(),
            airline_name: airline_name.into(),
            country_of_origin: country_of_origin.into(),
            year_founded,
            is_active,
        }
    }
}

impl Record for Airline {
    const KIND: &'static str = "airline";
}

impl Identified for Airline {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn overwrite_from(&mut self, other: Self) {
        self.iata_code = other.iata_code;
        self.airline_name = other.airline_name;
        self.country_of_origin = other.country_of_origin;
        self.year_founded = other.year_founded;
        self.is_active = other.is_active;
    }

    fn iata_code(&self) -> &str {
        &self.iata_code
    }
}
