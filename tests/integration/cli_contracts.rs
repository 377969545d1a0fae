use fleetmaster::persistence::StorageFormat;
use fleetmaster::ApiError;
use tempfile::TempDir;

use crate::integration::support::{add_a320, add_aer_lingus, add_fleet_entry, run, test_config};

#[test]
fn aircraft_list_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, StorageFormat::Json);
    add_a320(&config);

    let output = run(&config, &["aircraft", "list", "--format", "json"]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(1));
    let row = &parsed["aircraft"][0];
    assert_eq!(row.get("index").and_then(|v| v.as_u64()), Some(0));
    assert_eq!(row.get("id").and_then(|v| v.as_u64()), Some(0));
    assert_eq!(row.get("model").and_then(|v| v.as_str()), Some("A320"));
    assert_eq!(row.get("in_production").and_then(|v| v.as_bool()), Some(true));
}

#[test]
fn mutations_persist_between_invocations() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, StorageFormat::Yaml);
    add_aer_lingus(&config);
    add_aer_lingus(&config);

    assert!(temp_dir.path().join("airlines.yaml").exists());
    let output = run(&config, &["airline", "list", "--format", "json"]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"].as_u64(), Some(2));
    assert_eq!(parsed["airlines"][1]["id"].as_u64(), Some(1));
}

#[test]
fn delete_with_force_skips_prompt_and_keeps_counter() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, StorageFormat::Json);
    add_a320(&config);
    add_a320(&config);

    let output = run(&config, &["aircraft", "delete", "--index", "1", "--force"]).unwrap();
    assert!(output.contains("Deleted aircraft"));

    // The next id is recomputed from the highest id remaining on disk.
    add_a320(&config);
    let output = run(&config, &["aircraft", "list", "--format", "json"]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let ids: Vec<u64> = parsed["aircraft"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn missing_index_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, StorageFormat::Json);
    let result = run(&config, &["airline", "delete", "--index", "3", "--force"]);
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[test]
fn fleet_add_requires_an_airline_and_an_aircraft() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, StorageFormat::Json);
    add_aer_lingus(&config);

    let result = run(
        &config,
        &[
            "fleet", "add", "--airline", "0", "--aircraft", "0", "--registration", "EI-DEE",
            "--year-bought", "2004", "--hours-flown", "1", "--revenue-per-year", "1.5",
        ],
    );
    assert!(matches!(result, Err(ApiError::InputError(_))));
}

#[test]
fn revenue_report_json_contract_is_ranked() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, StorageFormat::Bincode);
    add_aer_lingus(&config);
    add_a320(&config);
    add_fleet_entry(&config, "0", "EI-AAA", "2020", "2.0");
    add_fleet_entry(&config, "0", "EI-BBB", "2015", "3.0");
    add_fleet_entry(&config, "9", "EI-CCC", "2023", "1.0");

    let output = run(
        &config,
        &["fleet", "revenue", "--airline", "0", "--as-of", "2024", "--format", "json"],
    )
    .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["as_of_year"].as_i64(), Some(2024));
    assert_eq!(parsed["airline"]["status"].as_str(), Some("known"));

    let rows = parsed["rows"].as_array().unwrap();
    let registrations: Vec<&str> = rows
        .iter()
        .map(|row| row["entry"]["registration"].as_str().unwrap())
        .collect();
    assert_eq!(registrations, vec!["EI-BBB", "EI-AAA", "EI-CCC"]);
    assert_eq!(rows[0]["lifetime_revenue"].as_f64(), Some(30.0));
    assert_eq!(rows[2]["aircraft"]["status"].as_str(), Some("unknown"));
}

#[test]
fn revenue_report_for_unknown_airline_is_empty_text() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, StorageFormat::Json);
    let output = run(&config, &["fleet", "revenue", "--airline", "4", "--as-of", "2024"]).unwrap();
    assert!(output.contains("No fleet records for this airline."));
}

#[test]
fn config_show_renders_toml_without_reading_data() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, StorageFormat::Json);
    std::fs::write(temp_dir.path().join("aircraft.json"), "garbage").unwrap();

    let output = run(&config, &["config", "show"]).unwrap();
    assert!(output.contains("[storage]"));
    assert!(output.contains("aircraft.json"));

    let result = run(&config, &["aircraft", "list"]);
    assert!(matches!(result, Err(ApiError::Persistence(_))));
}
