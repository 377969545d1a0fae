//! Tooling layer
//!
//! The command-line surface and the interactive menu, both driving a
//! [`crate::app::FleetManager`].

pub mod cli;
pub mod menu;

pub use cli::{Cli, CliContext, Commands};
pub use menu::Menu;
