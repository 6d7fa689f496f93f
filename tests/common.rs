#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hoslogger::models::duty_change::DutyStatusChange;
use hoslogger::models::duty_status::DutyStatus;
use hoslogger::models::log_input::LogInput;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hos() -> Command {
    cargo_bin_cmd!("hoslogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hoslogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an input file into tempdir and return its path
pub fn write_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_input.{}", name, ext));
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}

/// Initialize DB (creates tables) in test mode
pub fn init_db(db_path: &str) {
    hos()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// The worked example: 10.0 h driving, 11.0 h on duty, 20 h cycle used.
pub const SAMPLE_YAML: &str = r#"
driver_name: John Doe
date: 2025-03-14
truck_number: "T-100"
trailer_number: "TR-9"
carrier_name: Acme Freight
home_terminal_timezone: America/Chicago
shipping_document_numbers: BOL-123
current_location: Dallas, TX
pickup_location: Fort Worth, TX
dropoff_location: Austin, TX
cycle_hours_used: 20
duty_status_changes:
  - time: "7:00 a.m."
    location: "Fort Worth, TX"
    status: "Driving"
  - time: "12:00 p.m."
    location: "Waco, TX"
    status: "On Duty (Not Driving)"
  - time: "1:00 p.m."
    location: "Waco, TX"
    status: "Driving"
  - time: "6:00 p.m."
    location: "Austin, TX"
    status: "Off Duty"
"#;

pub fn change(time: &str, status: DutyStatus) -> DutyStatusChange {
    DutyStatusChange::new(time, "Somewhere, TX", status)
}

pub fn sample_input(changes: Vec<DutyStatusChange>, cycle_hours_used: f64) -> LogInput {
    LogInput {
        driver_name: "John Doe".into(),
        date: chrono::NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"),
        truck_number: "T-100".into(),
        trailer_number: "TR-9".into(),
        carrier_name: "Acme Freight".into(),
        home_terminal_timezone: "America/Chicago".into(),
        shipping_document_numbers: "BOL-123".into(),
        current_location: "Dallas, TX".into(),
        pickup_location: "Fort Worth, TX".into(),
        dropoff_location: "Austin, TX".into(),
        cycle_hours_used,
        duty_status_changes: changes,
    }
}
