//! Fleetmaster: airline, aircraft type and fleet assignment manager
//!
//! Three file-backed record stores (aircraft types, airlines, and the fleet
//! entries joining them) with pluggable JSON, YAML and bincode persistence, a
//! lifetime-revenue report, and a CLI with an interactive menu on top.

pub mod app;
pub mod concurrency;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod report;
pub mod store;
pub mod tooling;
pub mod types;

pub use app::FleetManager;
pub use concurrency::SharedFleet;
pub use error::{ApiError, PersistenceError};
