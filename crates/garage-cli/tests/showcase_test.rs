//! End-to-end tests for the garage binary and the showcase scenario

use garage_app::app::{run_showcase, Step};
use garage_app::fleet::default_fleet;
use garage_domain::model::{Car, Drivable, Vehicle};
use garage_types::ValidationError;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_garage(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_garage"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run garage binary")
}

#[test]
fn test_camry_scenario() {
    let mut car = Car::new("Toyota", "Camry", 2022, 15000.0);
    let sheet = car.display_info();
    assert_eq!(sheet.get("Mileage"), Some("15000"));
    assert_eq!(sheet.get("Efficiency"), Some("28.50 MPG"));

    assert_eq!(
        car.set_mileage(-500.0),
        Err(ValidationError::NegativeMileage(-500.0))
    );
    assert_eq!(car.mileage(), 15000.0);
}

#[test]
fn test_electric_car_via_downcast() {
    let mut fleet = default_fleet();
    let tesla = fleet[1].as_electric_car_mut().unwrap();
    assert!(tesla.drive().is_success());
    assert_eq!(tesla.battery_level(), 80.0);
    assert_eq!(tesla.calculate_efficiency(), 400.0);
}

#[test]
fn test_showcase_catches_single_rejection() {
    let transcript = run_showcase();
    let rejected = transcript
        .steps()
        .filter(|s| matches!(s, Step::Rejected { .. }))
        .count();
    assert_eq!(rejected, 1);
    assert!(!transcript
        .steps()
        .any(|s| matches!(s, Step::NotDrivable { .. })));
}

#[test]
fn test_binary_demo_table() {
    let home = tempdir().unwrap();
    let output = run_garage(home.path(), &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Make: Toyota, Model: Camry, Year: 2022"));
    assert!(stdout.contains("28.50 MPG"));
    assert!(stdout.contains("mileage cannot be negative"));
    assert!(stdout.contains("Engine kick-started"));
    assert!(stdout.contains("Driving quietly (battery at 70%)"));
}

#[test]
fn test_binary_demo_json() {
    let home = tempdir().unwrap();
    let output = run_garage(home.path(), &["demo", "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[1]["title"], "Polymorphism");
}

#[test]
fn test_binary_tour_missing_file_fails() {
    let home = tempdir().unwrap();
    let missing = home.path().join("absent.json");
    let output = run_garage(home.path(), &["tour", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_binary_efficiency_from_file() {
    let home = tempdir().unwrap();
    let fleet_path = home.path().join("fleet.json");
    std::fs::write(
        &fleet_path,
        r#"{"vehicles": [
            {"kind": "car", "make": "Honda", "model": "Civic", "year": 2020, "mileage": 0},
            {"kind": "electric_car", "make": "Nissan", "model": "Leaf", "year": 2021, "battery_level": 40, "range": 150}
        ]}"#,
    )
    .unwrap();

    let output = run_garage(
        home.path(),
        &["efficiency", fleet_path.to_str().unwrap(), "-f", "json"],
    );
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["vehicle"], "2021 Nissan Leaf");
    assert_eq!(rows[0]["efficiency"], 200.0);
    assert_eq!(rows[1]["kind"], "car");
}

#[test]
fn test_binary_config_roundtrip() {
    let home = tempdir().unwrap();
    let output = run_garage(home.path(), &["config", "--set-output", "json"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration saved."));

    // The saved default now applies without --format
    let output = run_garage(home.path(), &["efficiency"]);
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 3);
}
