//! Record model
//!
//! Value types for the three collections. Cross-collection references are plain
//! integer ids and are never assumed valid.

pub mod aircraft;
pub mod airline;
pub mod fleet;

pub use aircraft::Aircraft;
pub use airline::Airline;
pub use fleet::{FleetDetails, FleetEntry};

use crate::types::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A persisted record kind. `KIND` tags every data file so one collection's
/// file cannot be loaded into another store.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: &'static str;
}

/// Records carrying a store-assigned id and an IATA code.
pub trait Identified: Record {
    fn id(&self) -> RecordId;

    /// Set by the owning store on insertion only.
    fn assign_id(&mut self, id: RecordId);

    /// Copy every mutable field from `other`; the id is left untouched.
    fn overwrite_from(&mut self, other: Self);

    fn iata_code(&self) -> &str;
}
