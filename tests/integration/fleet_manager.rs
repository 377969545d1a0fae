use fleetmaster::config::StorePaths;
use fleetmaster::model::{Aircraft, Airline, FleetDetails, FleetEntry};
use fleetmaster::persistence::StorageFormat;
use fleetmaster::report::AircraftDetails;
use fleetmaster::{FleetManager, SharedFleet};
use std::thread;
use tempfile::TempDir;

fn store_paths(temp_dir: &TempDir) -> StorePaths {
    StorePaths {
        aircraft: temp_dir.path().join("aircraft.json"),
        airlines: temp_dir.path().join("airlines.json"),
        fleet: temp_dir.path().join("fleet.json"),
    }
}

fn details(registration: &str, year_bought: i32, revenue_per_year: f64) -> FleetDetails {
    FleetDetails {
        registration: registration.to_string(),
        year_bought,
        hours_flown: 12000,
        revenue_per_year,
        is_retired: false,
    }
}

#[test]
fn fleet_update_and_delete_use_natural_key() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = FleetManager::open(&store_paths(&temp_dir), StorageFormat::Json);
    manager.fleet.add(FleetEntry::new(0, 1, details("EI-AAA", 2010, 1.0)));
    manager.fleet.add(FleetEntry::new(0, 1, details("EI-BBB", 2011, 2.0)));

    assert!(manager.fleet.update(0, 1, details("EI-ZZZ", 2012, 5.0)));
    assert!(!manager.fleet.update(1, 0, details("EI-YYY", 2012, 5.0)));
    assert_eq!(manager.fleet.list_for_airline(0)[0].registration, "EI-ZZZ");
    assert_eq!(manager.fleet.list_for_airline(0)[1].registration, "EI-BBB");

    let removed = manager.fleet.delete(0, 1).unwrap();
    assert_eq!(removed.registration, "EI-ZZZ");
    assert_eq!(manager.fleet.count(), 1);
}

#[test]
fn report_survives_deleted_aircraft() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = FleetManager::open(&store_paths(&temp_dir), StorageFormat::Json);
    manager
        .airlines
        .add(Airline::new("FR", "Ryanair", "Ireland", 1984, true));
    manager
        .aircraft
        .add(Aircraft::new("738", "Boeing", "737-800", 189, 2935, 1998, false));
    manager.fleet.add(FleetEntry::new(0, 0, details("EI-DCL", 2004, 8.5)));
    manager.aircraft.delete(0);

    let report = manager.revenue_report(0, 2024);
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].aircraft, AircraftDetails::Unknown { aircraft_id: 0 });
    assert_eq!(report.rows[0].lifetime_revenue, 21.0 * 8.5);
}

#[test]
fn shared_fleet_saves_what_threads_added() {
    let temp_dir = TempDir::new().unwrap();
    let paths = store_paths(&temp_dir);
    let shared = SharedFleet::new(FleetManager::open(&paths, StorageFormat::Json));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..10 {
                    let name = format!("Airline {}-{}", t, i);
                    shared
                        .airlines()
                        .add(Airline::new("XX", name, "Nowhere", 2000, true));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    shared.save_all().unwrap();

    let mut reloaded = FleetManager::open(&paths, StorageFormat::Json);
    reloaded.load_all().unwrap();
    assert_eq!(reloaded.airlines.count(), 40);
    assert_eq!(reloaded.airlines.next_id(), 40);
}
