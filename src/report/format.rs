//! Text and JSON rendering of listings and the revenue report.

use super::revenue::{AircraftDetails, RevenueReport};
use crate::model::{Aircraft, Airline, FleetEntry};
use clap::ValueEnum;
use comfy_table::presets::{UTF8_BORDERS_ONLY, UTF8_FULL};
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Output format of listing commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn to_pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Aircraft listing. With `indexed`, the first column is the positional index
/// used by update and delete.
pub fn format_aircraft_list(
    title: &str,
    aircraft: &[&Aircraft],
    indexed: bool,
    format: OutputFormat,
) -> String {
    if format == OutputFormat::Json {
        let rows: Vec<serde_json::Value> = aircraft
            .iter()
            .enumerate()
            .map(|(index, a)| {
                let mut row = json!(a);
                if indexed {
                    row["index"] = json!(index);
                }
                row
            })
            .collect();
        return to_pretty_json(&json!({ "aircraft": rows, "total": aircraft.len() }));
    }

    let mut out = format!("{}\n\n", format_section_heading(title));
    if aircraft.is_empty() {
        out.push_str("No aircraft records.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    let mut header = Vec::new();
    if indexed {
        header.push("#");
    }
    header.extend([
        "ID",
        "IATA",
        "Manufacturer",
        "Model",
        "Capacity",
        "Range (nm)",
        "Introduced",
        "In production",
    ]);
    table.set_header(header);
    for (index, a) in aircraft.iter().enumerate() {
        let mut row = Vec::new();
        if indexed {
            row.push(index.to_string());
        }
        row.extend([
            a.id.to_string(),
            a.iata_code.clone(),
            a.manufacturer.clone(),
            a.model.clone(),
            a.capacity.to_string(),
            a.range_nm.to_string(),
            a.year_introduced.to_string(),
            yes_no(a.in_production).to_string(),
        ]);
        table.add_row(row);
    }
    out.push_str(&format!("{}\n\nTotal: {} aircraft\n", table, aircraft.len()));
    out
}

/// Airline listing; see [`format_aircraft_list`] for `indexed`.
pub fn format_airline_list(
    title: &str,
    airlines: &[&Airline],
    indexed: bool,
    format: OutputFormat,
) -> String {
    if format == OutputFormat::Json {
        let rows: Vec<serde_json::Value> = airlines
            .iter()
            .enumerate()
            .map(|(index, a)| {
                let mut row = json!(a);
                if indexed {
                    row["index"] = json!(index);
                }
                row
            })
            .collect();
        return to_pretty_json(&json!({ "airlines": rows, "total": airlines.len() }));
    }

    let mut out = format!("{}\n\n", format_section_heading(title));
    if airlines.is_empty() {
        out.push_str("No airline records.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    let mut header = Vec::new();
    if indexed {
        header.push("#");
    }
    header.extend(["ID", "IATA", "Name", "Country", "Founded", "Active"]);
    table.set_header(header);
    for (index, a) in airlines.iter().enumerate() {
        let mut row = Vec::new();
        if indexed {
            row.push(index.to_string());
        }
        row.extend([
            a.id.to_string(),
            a.iata_code.clone(),
            a.airline_name.clone(),
            a.country_of_origin.clone(),
            a.year_founded.to_string(),
            yes_no(a.is_active).to_string(),
        ]);
        table.add_row(row);
    }
    out.push_str(&format!("{}\n\nTotal: {} airline(s)\n", table, airlines.len()));
    out
}

pub fn format_fleet_list(title: &str, entries: &[&FleetEntry], format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_pretty_json(&json!({ "fleet": entries, "total": entries.len() }));
    }

    let mut out = format!("{}\n\n", format_section_heading(title));
    if entries.is_empty() {
        out.push_str("No fleet records.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Airline ID",
        "Aircraft ID",
        "Registration",
        "Bought",
        "Hours",
        "Revenue/yr (M)",
        "Retired",
    ]);
    for e in entries {
        table.add_row(vec![
            e.airline_id.to_string(),
            e.aircraft_id.to_string(),
            e.registration.clone(),
            e.year_bought.to_string(),
            e.hours_flown.to_string(),
            format!("{:.2}", e.revenue_per_year),
            yes_no(e.is_retired).to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\nTotal: {} fleet entries\n", table, entries.len()));
    out
}

/// A single count line, e.g. for "aircraft retired".
pub fn format_count(label: &str, count: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_pretty_json(&json!({ "label": label, "count": count })),
        OutputFormat::Text => format!("{}: {}", label, count),
    }
}

pub fn format_revenue_report(report: &RevenueReport, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_pretty_json(&json!({
            "airline": report.airline,
            "as_of_year": report.as_of_year,
            "rows": report.rows,
            "total_lifetime_revenue": report.total_lifetime_revenue(),
        }));
    }

    let mut out = format!(
        "{}\n\n",
        format_section_heading(&format!(
            "Top revenue fleet: {} as of {}",
            report.airline.label(),
            report.as_of_year
        ))
    );
    if report.rows.is_empty() {
        out.push_str("No fleet records for this airline.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Rank",
        "Registration",
        "Aircraft",
        "Capacity",
        "Range (nm)",
        "Years",
        "Revenue/yr (M)",
        "Lifetime (M)",
    ]);
    for (rank, row) in report.rows.iter().enumerate() {
        let (capacity, range) = match &row.aircraft {
            AircraftDetails::Known {
                capacity, range_nm, ..
            } => (capacity.to_string(), range_nm.to_string()),
            AircraftDetails::Unknown { .. } => ("-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            (rank + 1).to_string(),
            row.entry.registration.clone(),
            row.aircraft.label(),
            capacity,
            range,
            row.years_in_fleet.to_string(),
            format!("{:.2}", row.entry.revenue_per_year),
            format!("{:.2}", row.lifetime_revenue),
        ]);
    }
    out.push_str(&format!(
        "{}\n\nTotal lifetime revenue: {:.2}M\n",
        table,
        report.total_lifetime_revenue()
    ));
    out
}
