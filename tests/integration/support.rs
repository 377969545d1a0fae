use clap::Parser;
use fleetmaster::config::FleetConfig;
use fleetmaster::persistence::StorageFormat;
use fleetmaster::tooling::cli::{Cli, CliContext};
use tempfile::TempDir;

/// Configuration rooted in `temp_dir` with logging switched off.
pub fn test_config(temp_dir: &TempDir, format: StorageFormat) -> FleetConfig {
    let mut config = FleetConfig::default();
    config.storage.data_dir = Some(temp_dir.path().to_path_buf());
    config.storage.format = format;
    config.logging.enabled = false;
    config
}

/// Parse `args` as a fleetmaster command line and run it in a fresh context.
pub fn run(config: &FleetConfig, args: &[&str]) -> Result<String, fleetmaster::ApiError> {
    let mut argv = vec!["fleetmaster"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut context = CliContext::new(config.clone()).unwrap();
    context.execute(&cli.effective_command())
}

pub fn add_aer_lingus(config: &FleetConfig) {
    run(
        config,
        &[
            "airline", "add", "--iata", "EI", "--name", "Aer Lingus", "--country", "Ireland",
            "--year-founded", "1936",
        ],
    )
    .unwrap();
}

pub fn add_a320(config: &FleetConfig) {
    run(
        config,
        &[
            "aircraft", "add", "--iata", "320", "--manufacturer", "Airbus", "--model", "A320",
            "--capacity", "180", "--range-nm", "3300", "--year-introduced", "1988",
        ],
    )
    .unwrap();
}

pub fn add_fleet_entry(
    config: &FleetConfig,
    aircraft: &str,
    registration: &str,
    year: &str,
    revenue: &str,
) {
    run(
        config,
        &[
            "fleet", "add", "--airline", "0", "--aircraft", aircraft, "--registration",
            registration, "--year-bought", year, "--hours-flown", "1000", "--revenue-per-year",
            revenue,
        ],
    )
    .unwrap();
}
