//! Reporting
//!
//! The cross-store revenue ranking and the text/JSON renderers used by the CLI
//! and the interactive menu.

pub mod format;
pub mod revenue;

pub use format::OutputFormat;
pub use revenue::{
    rank_by_lifetime_revenue, AircraftDetails, AirlineDetails, RankedFleetEntry, RevenueReport,
};
