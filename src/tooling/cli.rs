//! CLI Tooling
//!
//! Command-line interface over the three stores. Without a subcommand the
//! interactive menu runs; every other command loads the existing data files,
//! performs one operation and persists the store it changed.

use crate::app::FleetManager;
use crate::config::{ConfigLoader, FleetConfig, StorePaths};
use crate::error::ApiError;
use crate::model::{Aircraft, Airline, FleetDetails, FleetEntry};
use crate::persistence::StorageFormat;
use crate::report::format::{
    format_aircraft_list, format_airline_list, format_count, format_fleet_list,
    format_revenue_report,
};
use crate::report::OutputFormat;
use crate::types::{RecordId, Year};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fleetmaster - airline, aircraft type and fleet assignment manager
#[derive(Parser, Debug)]
#[command(name = "fleetmaster", version)]
#[command(about = "Manage aircraft types, airlines and airline fleets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data files (overrides storage.data_dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data file format (overrides storage.format)
    #[arg(long, value_enum, global = true)]
    pub storage_format: Option<StorageFormat>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The command to run; the interactive menu when none was given.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Menu)
    }

    /// Load the layered configuration and apply the global flags on top.
    pub fn resolve_config(&self) -> Result<FleetConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => {
                let cwd = std::env::current_dir().map_err(|e| {
                    ApiError::ConfigError(format!("Failed to read current directory: {}", e))
                })?;
                ConfigLoader::load(&cwd)?
            }
        };
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        if let Some(format) = self.storage_format {
            config.storage.format = format;
        }
        config.logging = config.logging.with_overrides(
            self.log_level.clone(),
            self.log_format.clone(),
            self.log_output.clone(),
            self.log_file.clone(),
        );
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,
    /// Manage aircraft types
    Aircraft {
        #[command(subcommand)]
        command: AircraftCommands,
    },
    /// Manage airlines
    Airline {
        #[command(subcommand)]
        command: AirlineCommands,
    },
    /// Manage airline fleets
    Fleet {
        #[command(subcommand)]
        command: FleetCommands,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Fields of an aircraft type, shared by add and update.
#[derive(Args, Debug, Clone)]
pub struct AircraftArgs {
    /// IATA type code, e.g. 320
    #[arg(long)]
    pub iata: String,
    #[arg(long)]
    pub manufacturer: String,
    #[arg(long)]
    pub model: String,
    /// Seat capacity
    #[arg(long)]
    pub capacity: u32,
    /// Range in nautical miles
    #[arg(long)]
    pub range_nm: u32,
    #[arg(long)]
    pub year_introduced: Year,
    /// Whether the type is still built
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub in_production: bool,
}

impl From<&AircraftArgs> for Aircraft {
    fn from(args: &AircraftArgs) -> Self {
        Aircraft::new(
            args.iata.clone(),
            args.manufacturer.clone(),
            args.model.clone(),
            args.capacity,
            args.range_nm,
            args.year_introduced,
            args.in_production,
        )
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum AircraftCommands {
    /// List all aircraft with their positional index
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Find aircraft by IATA type code
    Find {
        #[arg(long)]
        iata: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List aircraft types no longer in production
    Retired {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List aircraft within a seat capacity range (inclusive)
    Capacity {
        #[arg(long)]
        min: u32,
        #[arg(long)]
        max: u32,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Add an aircraft type
    Add(AircraftArgs),
    /// Overwrite the aircraft at a positional index
    Update {
        #[arg(long)]
        index: usize,
        #[command(flatten)]
        values: AircraftArgs,
    },
    /// Delete the aircraft at a positional index
    Delete {
        #[arg(long)]
        index: usize,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Fields of an airline, shared by add and update.
#[derive(Args, Debug, Clone)]
pub struct AirlineArgs {
    /// 2-letter IATA code
    #[arg(long)]
    pub iata: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub year_founded: Year,
    /// Whether the airline still operates
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub active: bool,
}

impl From<&AirlineArgs> for Airline {
    fn from(args: &AirlineArgs) -> Self {
        Airline::new(
            args.iata.clone(),
            args.name.clone(),
            args.country.clone(),
            args.year_founded,
            args.active,
        )
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum AirlineCommands {
    /// List all airlines with their positional index
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Find airlines by IATA code
    Find {
        #[arg(long)]
        iata: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List airlines still in operation
    Active {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List airlines founded strictly before a year
    FoundedBefore {
        #[arg(long)]
        year: Year,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Add an airline
    Add(AirlineArgs),
    /// Overwrite the airline at a positional index
    Update {
        #[arg(long)]
        index: usize,
        #[command(flatten)]
        values: AirlineArgs,
    },
    /// Delete the airline at a positional index
    Delete {
        #[arg(long)]
        index: usize,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Mutable fields of a fleet entry, shared by add and update.
#[derive(Args, Debug, Clone)]
pub struct FleetArgs {
    /// Tail number, e.g. EI-DEE
    #[arg(long)]
    pub registration: String,
    #[arg(long)]
    pub year_bought: Year,
    #[arg(long)]
    pub hours_flown: u32,
    /// Average revenue per year, in millions
    #[arg(long)]
    pub revenue_per_year: f64,
    #[arg(long)]
    pub retired: bool,
}

impl FleetArgs {
    fn to_details(&self) -> Result<FleetDetails, ApiError> {
        Ok(FleetDetails {
            registration: self.registration.clone(),
            year_bought: self.year_bought,
            hours_flown: self.hours_flown,
            revenue_per_year: check_revenue(self.revenue_per_year)?,
            is_retired: self.retired,
        })
    }
}

/// Revenue must be a finite number; the JSON format cannot store anything else.
pub(crate) fn check_revenue(value: f64) -> Result<f64, ApiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::InputError(format!(
            "revenue per year must be a finite number, got {}",
            value
        )))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum FleetCommands {
    /// List fleet entries, optionally for one airline
    List {
        /// Airline id
        #[arg(long)]
        airline: Option<RecordId>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Find the first fleet entry with a registration
    Find {
        #[arg(long)]
        registration: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Assign an aircraft type to an airline's fleet
    Add {
        /// Airline id
        #[arg(long)]
        airline: RecordId,
        /// Aircraft id
        #[arg(long)]
        aircraft: RecordId,
        #[command(flatten)]
        values: FleetArgs,
    },
    /// Overwrite the first entry for an (airline, aircraft) pair
    Update {
        #[arg(long)]
        airline: RecordId,
        #[arg(long)]
        aircraft: RecordId,
        #[command(flatten)]
        values: FleetArgs,
    },
    /// Delete the first entry for an (airline, aircraft) pair
    Delete {
        #[arg(long)]
        airline: RecordId,
        #[arg(long)]
        aircraft: RecordId,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Rank an airline's fleet by lifetime revenue
    Revenue {
        #[arg(long)]
        airline: RecordId,
        /// Reference year (default: report.as_of_year, else the current year)
        #[arg(long)]
        as_of: Option<Year>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

/// CLI context owning the configuration and the stores
pub struct CliContext {
    config: FleetConfig,
    paths: StorePaths,
    manager: FleetManager,
    loaded: bool,
}

impl CliContext {
    /// Resolve the data file paths and bind the stores. Nothing is read yet.
    pub fn new(config: FleetConfig) -> Result<Self, ApiError> {
        let paths = config.storage.resolve_paths()?;
        let manager = FleetManager::open(&paths, config.storage.format);
        Ok(Self {
            config,
            paths,
            manager,
            loaded: false,
        })
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    pub fn manager(&self) -> &FleetManager {
        &self.manager
    }

    fn ensure_loaded(&mut self) -> Result<(), ApiError> {
        if !self.loaded {
            let loaded = self.manager.load_existing()?;
            tracing::debug!(loaded, "data files loaded");
            self.loaded = true;
        }
        Ok(())
    }

    /// Execute a CLI command
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Config {
                command: ConfigCommands::Show,
            } => self.handle_config_show(),
            Commands::Menu => {
                self.ensure_loaded()?;
                let as_of_year = self.config.report.effective_as_of_year();
                super::menu::Menu::new(&mut self.manager, as_of_year).run()?;
                Ok("Exiting app...".to_string())
            }
            Commands::Aircraft { command } => {
                self.ensure_loaded()?;
                self.handle_aircraft(command)
            }
            Commands::Airline { command } => {
                self.ensure_loaded()?;
                self.handle_airline(command)
            }
            Commands::Fleet { command } => {
                self.ensure_loaded()?;
                self.handle_fleet(command)
            }
        }
    }

    fn handle_config_show(&self) -> Result<String, ApiError> {
        let mut out = format!(
            "# aircraft file: {}\n# airlines file: {}\n# fleet file: {}\n\n",
            self.paths.aircraft.display(),
            self.paths.airlines.display(),
            self.paths.fleet.display()
        );
        out.push_str(&self.config.to_toml()?);
        Ok(out)
    }

    fn handle_aircraft(&mut self, command: &AircraftCommands) -> Result<String, ApiError> {
        let store = &mut self.manager.aircraft;
        match command {
            AircraftCommands::List { format } => {
                let all: Vec<&Aircraft> = store.list_all().collect();
                Ok(format_aircraft_list("Aircraft", &all, true, *format))
            }
            AircraftCommands::Find { iata, format } => Ok(format_aircraft_list(
                &format!("Aircraft with IATA code {}", iata),
                &store.find_by_iata_code(iata),
                false,
                *format,
            )),
            AircraftCommands::Retired { format } => {
                let retired = store.list_retired();
                let mut out = format_aircraft_list("Retired aircraft", &retired, false, *format);
                if *format == OutputFormat::Text {
                    out.push_str(&format!(
                        "\n{}",
                        format_count(
                            "Aircraft not in production",
                            store.count_not_in_production(),
                            *format
                        )
                    ));
                }
                Ok(out)
            }
            AircraftCommands::Capacity { min, max, format } => {
                if min > max {
                    return Err(ApiError::InputError(format!(
                        "minimum capacity {} exceeds maximum {}",
                        min, max
                    )));
                }
                Ok(format_aircraft_list(
                    &format!("Aircraft with seat capacity between {} and {}", min, max),
                    &store.filter_by_capacity_range(*min, *max),
                    false,
                    *format,
                ))
            }
            AircraftCommands::Add(args) => {
                let id = store.add(Aircraft::from(args));
                store.store()?;
                Ok(format!(
                    "Added aircraft {} {} with id {} at index {}",
                    args.manufacturer,
                    args.model,
                    id,
                    store.count() - 1
                ))
            }
            AircraftCommands::Update { index, values } => {
                if !store.update(*index, Aircraft::from(values)) {
                    return Err(ApiError::NotFound(format!("no aircraft at index {}", index)));
                }
                store.store()?;
                Ok(format!("Updated aircraft at index {}", index))
            }
            AircraftCommands::Delete { index, force } => {
                let target = store
                    .find_by_index(*index)
                    .ok_or_else(|| ApiError::NotFound(format!("no aircraft at index {}", index)))?;
                let label = format!("{} {} (id {})", target.manufacturer, target.model, target.id);
                if !*force && !confirm(&format!("Delete aircraft {}?", label))? {
                    return Ok("Deletion cancelled".to_string());
                }
                store.delete(*index);
                store.store()?;
                Ok(format!("Deleted aircraft {}", label))
            }
        }
    }

    fn handle_airline(&mut self, command: &AirlineCommands) -> Result<String, ApiError> {
        let store = &mut self.manager.airlines;
        match command {
            AirlineCommands::List { format } => {
                let all: Vec<&Airline> = store.list_all().collect();
                Ok(format_airline_list("Airlines", &all, true, *format))
            }
            AirlineCommands::Find { iata, format } => Ok(format_airline_list(
                &format!("Airlines with IATA code {}", iata),
                &store.find_by_iata_code(iata),
                false,
                *format,
            )),
            AirlineCommands::Active { format } => Ok(format_airline_list(
                "Active airlines",
                &store.filter_active(),
                false,
                *format,
            )),
            AirlineCommands::FoundedBefore { year, format } => Ok(format_airline_list(
                &format!("Airlines founded before {}", year),
                &store.filter_founded_before(*year),
                false,
                *format,
            )),
            AirlineCommands::Add(args) => {
                let id = store.add(Airline::from(args));
                store.store()?;
                Ok(format!(
                    "Added airline {} with id {} at index {}",
                    args.name,
                    id,
                    store.count() - 1
                ))
            }
            AirlineCommands::Update { index, values } => {
                if !store.update(*index, Airline::from(values)) {
                    return Err(ApiError::NotFound(format!("no airline at index {}", index)));
                }
                store.store()?;
                Ok(format!("Updated airline at index {}", index))
            }
            AirlineCommands::Delete { index, force } => {
                let target = store
                    .find_by_index(*index)
                    .ok_or_else(|| ApiError::NotFound(format!("no airline at index {}", index)))?;
                let label = format!("{} (id {})", target.airline_name, target.id);
                if !*force && !confirm(&format!("Delete airline {}?", label))? {
                    return Ok("Deletion cancelled".to_string());
                }
                store.delete(*index);
                store.store()?;
                Ok(format!("Deleted airline {}", label))
            }
        }
    }

    fn handle_fleet(&mut self, command: &FleetCommands) -> Result<String, ApiError> {
        match command {
            FleetCommands::List { airline, format } => {
                let fleet = &self.manager.fleet;
                let (title, entries): (String, Vec<&FleetEntry>) = match airline {
                    Some(id) => (
                        format!("Fleet of airline {}", id),
                        fleet.list_for_airline(*id),
                    ),
                    None => ("Fleet".to_string(), fleet.list_all().collect()),
                };
                Ok(format_fleet_list(&title, &entries, *format))
            }
            FleetCommands::Find {
                registration,
                format,
            } => {
                let entry = self.manager.fleet.find_by_registration(registration).ok_or_else(|| {
                    ApiError::NotFound(format!("no fleet entry with registration {}", registration))
                })?;
                Ok(format_fleet_list(
                    &format!("Registration {}", registration),
                    &[entry],
                    *format,
                ))
            }
            FleetCommands::Add {
                airline,
                aircraft,
                values,
            } => {
                self.require_fleet_prerequisites()?;
                let details = values.to_details()?;
                self.manager
                    .fleet
                    .add(FleetEntry::new(*airline, *aircraft, details));
                self.manager.fleet.store()?;
                Ok(format!(
                    "Added {} to the fleet of airline {} (aircraft {})",
                    values.registration, airline, aircraft
                ))
            }
            FleetCommands::Update {
                airline,
                aircraft,
                values,
            } => {
                self.require_fleet_prerequisites()?;
                let details = values.to_details()?;
                if !self.manager.fleet.update(*airline, *aircraft, details) {
                    return Err(fleet_entry_not_found(*airline, *aircraft));
                }
                self.manager.fleet.store()?;
                Ok(format!(
                    "Updated fleet entry for airline {} and aircraft {}",
                    airline, aircraft
                ))
            }
            FleetCommands::Delete {
                airline,
                aircraft,
                force,
            } => {
                self.require_fleet_prerequisites()?;
                if !*force
                    && !confirm(&format!(
                        "Delete fleet entry for airline {} and aircraft {}?",
                        airline, aircraft
                    ))?
                {
                    return Ok("Deletion cancelled".to_string());
                }
                let removed = self
                    .manager
                    .fleet
                    .delete(*airline, *aircraft)
                    .ok_or_else(|| fleet_entry_not_found(*airline, *aircraft))?;
                self.manager.fleet.store()?;
                Ok(format!(
                    "Deleted {} from the fleet of airline {}",
                    removed.registration, airline
                ))
            }
            FleetCommands::Revenue {
                airline,
                as_of,
                format,
            } => {
                let as_of_year = as_of.unwrap_or_else(|| self.config.report.effective_as_of_year());
                let report = self.manager.revenue_report(*airline, as_of_year);
                Ok(format_revenue_report(&report, *format))
            }
        }
    }

    fn require_fleet_prerequisites(&self) -> Result<(), ApiError> {
        if self.manager.can_manage_fleet() {
            Ok(())
        } else {
            Err(ApiError::InputError(
                "add an airline and an aircraft before managing fleets".to_string(),
            ))
        }
    }
}

fn fleet_entry_not_found(airline: RecordId, aircraft: RecordId) -> ApiError {
    ApiError::NotFound(format!(
        "no fleet entry for airline {} and aircraft {}",
        airline, aircraft
    ))
}

fn confirm(prompt: &str) -> Result<bool, ApiError> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ApiError::InputError(format!("Failed to get user input: {}", e)))
}
