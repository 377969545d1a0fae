//! Integration tests driving the public API and the CLI context

mod cli_contracts;
mod fleet_manager;
mod persistence_roundtrip;
mod support;
