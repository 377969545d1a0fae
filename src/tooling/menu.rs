//! Interactive menu
//!
//! Text menus over [`FleetManager`]. A failed action is printed and the menu
//! continues; only a failure to read from the terminal ends the session.

use crate::app::FleetManager;
use crate::error::ApiError;
use crate::model::{Aircraft, Airline, FleetDetails, FleetEntry};
use crate::report::format::{
    format_aircraft_list, format_airline_list, format_count, format_fleet_list,
    format_revenue_report,
};
use crate::report::OutputFormat;
use crate::types::{RecordId, Year};
use dialoguer::{Confirm, Input, Select};
use std::fmt::Display;
use std::str::FromStr;

const TEXT: OutputFormat = OutputFormat::Text;

const NO_FLEET_PREREQUISITES: &str =
    "You need to add an airline and an aircraft before you can manage fleets.";
const NO_AIRCRAFT_AT_INDEX: &str = "There are no aircraft at this index number.";
const NO_AIRLINE_AT_INDEX: &str = "There are no airlines at this index number.";
const EMPTY_FLEET: &str = "There are no aircraft in this fleet.";

pub struct Menu<'a> {
    manager: &'a mut FleetManager,
    as_of_year: Year,
    /// Edits made since the last Save or Load.
    unsaved: bool,
}

impl<'a> Menu<'a> {
    /// `as_of_year` is the default offered by the revenue report prompt.
    pub fn new(manager: &'a mut FleetManager, as_of_year: Year) -> Self {
        Self {
            manager,
            as_of_year,
            unsaved: false,
        }
    }

    /// Loop over the main menu until Exit.
    ///
    /// Edits stay in memory until Save; Load replaces them with the files on disk.
    pub fn run(&mut self) -> Result<(), ApiError> {
        loop {
            let choice = select(
                "Main menu",
                &[
                    "Aircraft management",
                    "Airline management",
                    "Fleet management",
                    "Find aircraft",
                    "Find airlines",
                    "Find fleets",
                    "Save",
                    "Load",
                    "Exit",
                ],
            )?;
            let outcome = match choice {
                0 => self.aircraft_menu(),
                1 => self.airline_menu(),
                2 => self.fleet_menu(),
                3 => self.find_aircraft_menu(),
                4 => self.find_airlines_menu(),
                5 => self.find_fleets_menu(),
                6 => self.save(),
                7 => {
                    if self.unsaved && !confirm("Discard unsaved changes and load from disk?")? {
                        Ok("Load cancelled.".to_string())
                    } else {
                        self.load()
                    }
                }
                _ => {
                    if self.unsaved && yes_no("Save changes before exiting?")? {
                        if let Err(e) = self.save() {
                            report_failure(&e);
                            continue;
                        }
                    }
                    return Ok(());
                }
            };
            match outcome {
                Ok(message) if message.is_empty() => {}
                Ok(message) => println!("{}\n", message),
                Err(e @ ApiError::InputError(_)) => return Err(e),
                Err(e) => report_failure(&e),
            }
        }
    }

    fn aircraft_menu(&mut self) -> Result<String, ApiError> {
        let choice = select(
            "Aircraft",
            &["Add aircraft", "Update aircraft", "Delete aircraft", "Back"],
        )?;
        match choice {
            0 => Ok(self.add_aircraft(prompt_aircraft()?)),
            1 => {
                if self.manager.aircraft.count() == 0 {
                    return Ok("There are no aircraft stored.".to_string());
                }
                println!("{}", self.list_aircraft());
                let index: usize = number("Index of the aircraft to update")?;
                if !self.manager.aircraft.is_valid_index(index) {
                    return Ok(NO_AIRCRAFT_AT_INDEX.to_string());
                }
                Ok(self.update_aircraft(index, prompt_aircraft()?))
            }
            2 => {
                if self.manager.aircraft.count() == 0 {
                    return Ok("There are no aircraft stored.".to_string());
                }
                println!("{}", self.list_aircraft());
                let index: usize = number("Index of the aircraft to delete")?;
                let Some(target) = self.manager.aircraft.find_by_index(index) else {
                    return Ok(NO_AIRCRAFT_AT_INDEX.to_string());
                };
                let prompt = format!("Delete {} {}?", target.manufacturer, target.model);
                if !confirm(&prompt)? {
                    return Ok("Deletion cancelled.".to_string());
                }
                Ok(self.delete_aircraft(index))
            }
            _ => Ok(String::new()),
        }
    }

    fn airline_menu(&mut self) -> Result<String, ApiError> {
        let choice = select(
            "Airlines",
            &["Add airline", "Update airline", "Delete airline", "Back"],
        )?;
        match choice {
            0 => Ok(self.add_airline(prompt_airline()?)),
            1 => {
                if self.manager.airlines.count() == 0 {
                    return Ok("There are no airlines stored.".to_string());
                }
                println!("{}", self.list_airlines());
                let index: usize = number("Index of the airline to update")?;
                if !self.manager.airlines.is_valid_index(index) {
                    return Ok(NO_AIRLINE_AT_INDEX.to_string());
                }
                Ok(self.update_airline(index, prompt_airline()?))
            }
            2 => {
                if self.manager.airlines.count() == 0 {
                    return Ok("There are no airlines stored.".to_string());
                }
                println!("{}", self.list_airlines());
                let index: usize = number("Index of the airline to delete")?;
                let Some(target) = self.manager.airlines.find_by_index(index) else {
                    return Ok(NO_AIRLINE_AT_INDEX.to_string());
                };
                let prompt = format!("Delete {}?", target.airline_name);
                if !confirm(&prompt)? {
                    return Ok("Deletion cancelled.".to_string());
                }
                Ok(self.delete_airline(index))
            }
            _ => Ok(String::new()),
        }
    }

    fn fleet_menu(&mut self) -> Result<String, ApiError> {
        let choice = select(
            "Fleets",
            &[
                "Add aircraft to fleet",
                "Update aircraft in fleet",
                "Delete aircraft from fleet",
                "Back",
            ],
        )?;
        if choice == 3 {
            return Ok(String::new());
        }
        if !self.manager.can_manage_fleet() {
            return Ok(NO_FLEET_PREREQUISITES.to_string());
        }
        match choice {
            0 => {
                println!("{}", self.list_airlines());
                let airline_id: RecordId = number("Airline id")?;
                println!("{}", self.list_aircraft());
                let aircraft_id: RecordId = number("Aircraft id")?;
                let details = prompt_fleet_details()?;
                Ok(self.add_to_fleet(airline_id, aircraft_id, details))
            }
            1 => {
                let airline_id: RecordId = number("Airline id whose fleet to update")?;
                let entries = self.manager.fleet.list_for_airline(airline_id);
                if entries.is_empty() {
                    return Ok(EMPTY_FLEET.to_string());
                }
                println!("{}", format_fleet_list("Airline fleet", &entries, TEXT));
                let aircraft_id: RecordId = number("Aircraft id of the entry to update")?;
                let details = prompt_fleet_details()?;
                Ok(self.update_in_fleet(airline_id, aircraft_id, details))
            }
            _ => {
                let airline_id: RecordId = number("Airline id whose fleet to delete from")?;
                let entries = self.manager.fleet.list_for_airline(airline_id);
                if entries.is_empty() {
                    return Ok(EMPTY_FLEET.to_string());
                }
                println!("{}", format_fleet_list("Airline fleet", &entries, TEXT));
                let aircraft_id: RecordId = number("Aircraft id of the entry to delete")?;
                if !confirm("Delete this fleet entry?")? {
                    return Ok("Deletion cancelled.".to_string());
                }
                Ok(self.delete_from_fleet(airline_id, aircraft_id))
            }
        }
    }

    fn add_aircraft(&mut self, aircraft: Aircraft) -> String {
        let id = self.manager.aircraft.add(aircraft);
        self.unsaved = true;
        format!("Aircraft added with id {}.", id)
    }

    fn update_aircraft(&mut self, index: usize, values: Aircraft) -> String {
        if !self.manager.aircraft.update(index, values) {
            return NO_AIRCRAFT_AT_INDEX.to_string();
        }
        self.unsaved = true;
        "Update successful!".to_string()
    }

    fn delete_aircraft(&mut self, index: usize) -> String {
        if self.manager.aircraft.delete(index).is_none() {
            return NO_AIRCRAFT_AT_INDEX.to_string();
        }
        self.unsaved = true;
        "Deleted successfully!".to_string()
    }

    fn add_airline(&mut self, airline: Airline) -> String {
        let id = self.manager.airlines.add(airline);
        self.unsaved = true;
        format!("Airline added with id {}.", id)
    }

    fn update_airline(&mut self, index: usize, values: Airline) -> String {
        if !self.manager.airlines.update(index, values) {
            return NO_AIRLINE_AT_INDEX.to_string();
        }
        self.unsaved = true;
        "Update successful!".to_string()
    }

    fn delete_airline(&mut self, index: usize) -> String {
        if self.manager.airlines.delete(index).is_none() {
            return NO_AIRLINE_AT_INDEX.to_string();
        }
        self.unsaved = true;
        "Deleted successfully!".to_string()
    }

    fn add_to_fleet(
        &mut self,
        airline_id: RecordId,
        aircraft_id: RecordId,
        details: FleetDetails,
    ) -> String {
        if !self.manager.can_manage_fleet() {
            return NO_FLEET_PREREQUISITES.to_string();
        }
        let registration = details.registration.clone();
        self.manager
            .fleet
            .add(FleetEntry::new(airline_id, aircraft_id, details));
        self.unsaved = true;
        format!("{} added to the fleet.", registration)
    }

    fn update_in_fleet(
        &mut self,
        airline_id: RecordId,
        aircraft_id: RecordId,
        details: FleetDetails,
    ) -> String {
        if !self.manager.fleet.update(airline_id, aircraft_id, details) {
            return "Update failed: no such aircraft in this fleet.".to_string();
        }
        self.unsaved = true;
        "Update successful!".to_string()
    }

    fn delete_from_fleet(&mut self, airline_id: RecordId, aircraft_id: RecordId) -> String {
        if self.manager.fleet.delete(airline_id, aircraft_id).is_none() {
            return "Failed to delete aircraft from fleet.".to_string();
        }
        self.unsaved = true;
        "Aircraft deleted successfully!".to_string()
    }

    fn find_aircraft_menu(&mut self) -> Result<String, ApiError> {
        let store = &self.manager.aircraft;
        let choice = select(
            "Find aircraft",
            &["All aircraft", "By IATA code", "Retired aircraft", "By seat capacity", "Back"],
        )?;
        match choice {
            0 => Ok(self.list_aircraft()),
            1 => {
                let code = text("Aircraft IATA code")?;
                Ok(format_aircraft_list(
                    &format!("Aircraft with IATA code {}", code),
                    &store.find_by_iata_code(&code),
                    false,
                    TEXT,
                ))
            }
            2 => {
                let mut out =
                    format_aircraft_list("Retired aircraft", &store.list_retired(), false, TEXT);
                out.push('\n');
                out.push_str(&format_count(
                    "Aircraft not in production",
                    store.count_not_in_production(),
                    TEXT,
                ));
                Ok(out)
            }
            3 => {
                let min: u32 = number("Minimum seat capacity")?;
                let max: u32 = number("Maximum seat capacity")?;
                Ok(format_aircraft_list(
                    &format!("Aircraft with seat capacity between {} and {}", min, max),
                    &store.filter_by_capacity_range(min, max),
                    false,
                    TEXT,
                ))
            }
            _ => Ok(String::new()),
        }
    }

    fn find_airlines_menu(&mut self) -> Result<String, ApiError> {
        let store = &self.manager.airlines;
        let choice = select(
            "Find airlines",
            &["All airlines", "By IATA code", "Active airlines", "Founded before a year", "Back"],
        )?;
        match choice {
            0 => Ok(self.list_airlines()),
            1 => {
                let code = text("Airline IATA code")?;
                Ok(format_airline_list(
                    &format!("Airlines with IATA code {}", code),
                    &store.find_by_iata_code(&code),
                    false,
                    TEXT,
                ))
            }
            2 => Ok(format_airline_list("Active airlines", &store.filter_active(), false, TEXT)),
            3 => {
                let year: Year = number("Year to search before")?;
                Ok(format_airline_list(
                    &format!("Airlines founded before {}", year),
                    &store.filter_founded_before(year),
                    false,
                    TEXT,
                ))
            }
            _ => Ok(String::new()),
        }
    }

    fn find_fleets_menu(&mut self) -> Result<String, ApiError> {
        let choice = select(
            "Find fleets",
            &["Fleet of an airline", "By registration", "Top revenue fleet", "Back"],
        )?;
        match choice {
            0 => {
                let airline_id: RecordId = number("Airline id")?;
                let entries = self.manager.fleet.list_for_airline(airline_id);
                Ok(format_fleet_list(
                    &format!("Fleet of airline {}", airline_id),
                    &entries,
                    TEXT,
                ))
            }
            1 => {
                let registration = text("Registration (e.g. EI-DEE)")?;
                match self.manager.fleet.find_by_registration(&registration) {
                    Some(entry) => Ok(format_fleet_list(
                        &format!("Registration {}", registration),
                        &[entry],
                        TEXT,
                    )),
                    None => Ok(format!("No aircraft registered as {}.", registration)),
                }
            }
            2 => {
                let airline_id: RecordId = number("Airline id")?;
                let as_of_year: Year = Input::new()
                    .with_prompt("As of year")
                    .default(self.as_of_year)
                    .interact_text()
                    .map_err(input_error)?;
                let report = self.manager.revenue_report(airline_id, as_of_year);
                Ok(format_revenue_report(&report, TEXT))
            }
            _ => Ok(String::new()),
        }
    }

    fn save(&mut self) -> Result<String, ApiError> {
        self.manager.save_all()?;
        self.unsaved = false;
        Ok("Save successful!".to_string())
    }

    fn load(&mut self) -> Result<String, ApiError> {
        self.manager.load_all()?;
        self.unsaved = false;
        Ok("Load successful!".to_string())
    }

    fn list_aircraft(&self) -> String {
        let all: Vec<&Aircraft> = self.manager.aircraft.list_all().collect();
        format_aircraft_list("Aircraft", &all, true, TEXT)
    }

    fn list_airlines(&self) -> String {
        let all: Vec<&Airline> = self.manager.airlines.list_all().collect();
        format_airline_list("Airlines", &all, true, TEXT)
    }
}

fn report_failure(e: &ApiError) {
    tracing::warn!(error = %e, "menu action failed");
    eprintln!("Error: {}\n", e);
}

fn input_error(e: dialoguer::Error) -> ApiError {
    ApiError::InputError(format!("Failed to get user input: {}", e))
}

fn select(prompt: &str, items: &[&str]) -> Result<usize, ApiError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(input_error)
}

fn text(prompt: &str) -> Result<String, ApiError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(input_error)
}

/// Re-prompts until the entry parses as `T`.
fn number<T>(prompt: &str) -> Result<T, ApiError>
where
    T: Clone + Display + FromStr,
    T::Err: Display,
{
    Input::<T>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(input_error)
}

fn confirm(prompt: &str) -> Result<bool, ApiError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(input_error)
}

fn yes_no(prompt: &str) -> Result<bool, ApiError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(input_error)
}

fn prompt_aircraft() -> Result<Aircraft, ApiError> {
    Ok(Aircraft::new(
        text("Aircraft IATA code (e.g. 320)")?,
        text("Manufacturer")?,
        text("Model")?,
        number("Seat capacity")?,
        number("Range in nautical miles")?,
        number("Year production started")?,
        yes_no("Still in production?")?,
    ))
}

fn prompt_airline() -> Result<Airline, ApiError> {
    Ok(Airline::new(
        text("2-letter airline IATA code")?,
        text("Airline name")?,
        text("Country of origin")?,
        number("Year founded")?,
        yes_no("Still in operation?")?,
    ))
}

fn prompt_fleet_details() -> Result<FleetDetails, ApiError> {
    let registration = text("Registration (e.g. EI-DEE)")?;
    let year_bought = number("Year bought")?;
    let hours_flown = number("Hours flown")?;
    let revenue_per_year = Input::<f64>::new()
        .with_prompt("Average revenue per year (millions)")
        .validate_with(|value: &f64| -> Result<(), &'static str> {
            if value.is_finite() {
                Ok(())
            } else {
                Err("revenue must be a finite number")
            }
        })
        .interact_text()
        .map_err(input_error)?;
    let is_retired = Confirm::new()
        .with_prompt("Retired?")
        .default(false)
        .interact()
        .map_err(input_error)?;
    Ok(FleetDetails {
        registration,
        year_bought,
        hours_flown,
        revenue_per_year,
        is_retired,
    })
}
