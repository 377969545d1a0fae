//! Fleetmaster CLI Binary
//!
//! Command-line interface and interactive menu for the fleet manager.

use clap::Parser;
use fleetmaster::logging::init_logging;
use fleetmaster::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let mut context = match CliContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing stores: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.effective_command()) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
