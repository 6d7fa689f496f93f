use hoslogger::core::calculator::limits::HosLimits;
use hoslogger::core::logic::Core;
use hoslogger::core::sheet::{COMPLIANT_LABEL, VIOLATION_LABEL, render_log_sheet};
use hoslogger::models::duty_status::DutyStatus::{Driving, OffDuty, OnDutyNotDriving};

mod common;
use common::{change, sample_input};

const EXPECTED_SHEET: &str = "\
ELECTRONIC LOGGING DEVICE (ELD) DAILY LOG

Driver: John Doe
Date: 03/14/2025
Truck/Tractor Number: T-100
Trailer Number: TR-9
Carrier: Acme Freight
Home Terminal Timezone: America/Chicago
Shipping Documents: BOL-123

TRIP INFORMATION:
Current Location: Dallas, TX
Pickup Location: Fort Worth, TX
Dropoff Location: Austin, TX
Cycle Hours Used (Start of Day): 20.0

DUTY STATUS CHANGES:
- Time: 7:00 a.m., Location: Somewhere, TX, Status: Driving
- Time: 12:00 p.m., Location: Somewhere, TX, Status: On Duty (Not Driving)
- Time: 1:00 p.m., Location: Somewhere, TX, Status: Driving
- Time: 6:00 p.m., Location: Somewhere, TX, Status: Off Duty

HOURS OF SERVICE SUMMARY:
Daily Driving Hours: 10.0
Daily On-Duty Hours: 11.0
Cycle Hours Used: 20.0

COMPLIANCE STATUS: ✓ COMPLIANT

This log was generated electronically and complies with FMCSA ELD regulations.";

fn worked_example() -> Vec<hoslogger::models::duty_change::DutyStatusChange> {
    vec![
        change("7:00 a.m.", Driving),
        change("12:00 p.m.", OnDutyNotDriving),
        change("1:00 p.m.", Driving),
        change("6:00 p.m.", OffDuty),
    ]
}

#[test]
fn test_sheet_matches_expected_layout() {
    let input = sample_input(worked_example(), 20.0);
    let (_, result) = Core::generate_log(&input, &HosLimits::default());

    assert_eq!(result.log_sheet, EXPECTED_SHEET);
}

#[test]
fn test_changes_listed_in_given_order() {
    let mut changes = worked_example();
    changes.reverse();
    let input = sample_input(changes, 20.0);
    let (_, result) = Core::generate_log(&input, &HosLimits::default());

    let first = result
        .log_sheet
        .find("Time: 6:00 p.m.")
        .expect("6:00 p.m. listed");
    let last = result
        .log_sheet
        .find("Time: 7:00 a.m.")
        .expect("7:00 a.m. listed");
    assert!(first < last);

    // totals do not depend on the listing order
    assert!(result.log_sheet.contains("Daily Driving Hours: 10.0"));
}

#[test]
fn test_sheet_has_no_surrounding_whitespace() {
    let input = sample_input(vec![], 0.0);
    let (summary, _) = Core::generate_log(&input, &HosLimits::default());
    let sheet = render_log_sheet(&input, &summary);

    assert_eq!(sheet, sheet.trim());
    assert!(sheet.contains("DUTY STATUS CHANGES:\n\nHOURS OF SERVICE SUMMARY:"));
    assert!(sheet.contains("Cycle Hours Used (Start of Day): 0.0"));
}

#[test]
fn test_fractional_cycle_hours_keep_their_digits_at_start_of_day() {
    let input = sample_input(worked_example(), 20.125);
    let (_, result) = Core::generate_log(&input, &HosLimits::default());

    assert!(
        result
            .log_sheet
            .contains("Cycle Hours Used (Start of Day): 20.125")
    );
    assert!(result.log_sheet.contains("Cycle Hours Used: 20.1"));
}

#[test]
fn test_violation_label_on_sheet() {
    let changes = vec![change("5:00 a.m.", Driving), change("5:00 p.m.", OffDuty)];
    let input = sample_input(changes, 0.0);
    let (summary, result) = Core::generate_log(&input, &HosLimits::default());

    assert!(!summary.is_compliant());
    assert!(result.log_sheet.contains(VIOLATION_LABEL));
    assert!(!result.log_sheet.contains(COMPLIANT_LABEL));
}
