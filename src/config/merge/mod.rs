//! Source composition for [`FleetConfig`](crate::config::FleetConfig).

pub mod policy;
pub mod service;

pub use service::MergeService;
