use fleetmaster::model::{Aircraft, FleetEntry, FleetDetails};
use fleetmaster::persistence::StorageFormat;
use fleetmaster::store::{AircraftStore, FleetStore};
use fleetmaster::PersistenceError;
use tempfile::TempDir;

#[test]
fn every_format_restores_records_and_counter() {
    for format in [StorageFormat::Json, StorageFormat::Yaml, StorageFormat::Bincode] {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(format!("aircraft.{}", format.extension()));

        let mut store = AircraftStore::new(format.serializer_for(&path));
        store.add(Aircraft::new("77W", "Boeing", "777-300ER", 396, 7370, 2004, true));
        store.add(Aircraft::new("343", "Airbus", "A340-300", 295, 7400, 1993, false));
        store.delete(0);
        store.store().unwrap();

        let mut reloaded = AircraftStore::new(format.serializer_for(&path));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count(), 1, "{}", format);
        assert_eq!(reloaded.find_by_index(0).unwrap().id, 1, "{}", format);
        assert_eq!(reloaded.next_id(), 2, "{}", format);
    }
}

#[test]
fn revenue_figures_survive_text_formats_exactly() {
    for format in [StorageFormat::Json, StorageFormat::Yaml] {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(format!("fleet.{}", format.extension()));
        let mut store = FleetStore::new(format.serializer_for(&path));
        store.add(FleetEntry::new(
            3,
            4,
            FleetDetails {
                registration: "G-EUUA".to_string(),
                year_bought: 2002,
                hours_flown: 61234,
                revenue_per_year: 0.1 + 0.2,
                is_retired: true,
            },
        ));
        store.store().unwrap();

        let mut reloaded = FleetStore::new(format.serializer_for(&path));
        reloaded.load().unwrap();
        let entry = reloaded.find_by_registration("G-EUUA").unwrap();
        assert_eq!(entry.revenue_per_year, 0.1 + 0.2);
        assert!(entry.is_retired);
    }
}

#[test]
fn missing_file_is_not_found_and_keeps_memory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");
    let mut store = AircraftStore::new(StorageFormat::Json.serializer_for(&path));
    store.add(Aircraft::new("320", "Airbus", "A320", 180, 3300, 1988, true));

    assert!(matches!(store.load(), Err(PersistenceError::NotFound(_))));
    assert_eq!(store.count(), 1);
    assert_eq!(store.next_id(), 1);
}

#[test]
fn json_file_is_readable_by_other_tools() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("aircraft.json");
    let mut store = AircraftStore::new(StorageFormat::Json.serializer_for(&path));
    store.add(Aircraft::new("320", "Airbus", "A320", 180, 3300, 1988, true));
    store.store().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(parsed.to_string().contains("A320"));
}
