//! Record stores
//!
//! Each store exclusively owns one ordered collection and its persistence
//! binding. Cross-store references are plain ids resolved by explicit lookup.

pub mod aircraft;
pub mod airline;
pub mod fleet;
pub mod table;

pub use aircraft::AircraftStore;
pub use airline::AirlineStore;
pub use fleet::FleetStore;
pub use table::RecordTable;
