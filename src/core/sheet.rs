//! Text rendering of the ELD daily log sheet.
//!
//! Headings and section order are fixed: stored sheets from earlier
//! versions must stay byte-comparable with new ones.

use crate::models::hos_summary::HosSummary;
use crate::models::log_input::LogInput;
use crate::utils::float_repr;

pub const COMPLIANT_LABEL: &str = "✓ COMPLIANT";
pub const VIOLATION_LABEL: &str = "⚠ VIOLATION";

pub fn compliance_label(compliant: bool) -> &'static str {
    if compliant {
        COMPLIANT_LABEL
    } else {
        VIOLATION_LABEL
    }
}

pub fn render_log_sheet(input: &LogInput, summary: &HosSummary) -> String {
    // Given order, not clock order
    let changes: String = input
        .duty_status_changes
        .iter()
        .map(|c| c.sheet_line() + "\n")
        .collect();

    format!(
        "ELECTRONIC LOGGING DEVICE (ELD) DAILY LOG\n\
         \n\
         Driver: {driver}\n\
         Date: {date}\n\
         Truck/Tractor Number: {truck}\n\
         Trailer Number: {trailer}\n\
         Carrier: {carrier}\n\
         Home Terminal Timezone: {timezone}\n\
         Shipping Documents: {documents}\n\
         \n\
         TRIP INFORMATION:\n\
         Current Location: {current}\n\
         Pickup Location: {pickup}\n\
         Dropoff Location: {dropoff}\n\
         Cycle Hours Used (Start of Day): {cycle_start}\n\
         \n\
         DUTY STATUS CHANGES:\n\
         {changes}\
         \n\
         HOURS OF SERVICE SUMMARY:\n\
         Daily Driving Hours: {driving:.1}\n\
         Daily On-Duty Hours: {on_duty:.1}\n\
         Cycle Hours Used: {cycle:.1}\n\
         \n\
         COMPLIANCE STATUS: {status}\n\
         \n\
         This log was generated electronically and complies with FMCSA ELD regulations.",
        driver = input.driver_name,
        date = input.date.format("%m/%d/%Y"),
        truck = input.truck_number,
        trailer = input.trailer_number,
        carrier = input.carrier_name,
        timezone = input.home_terminal_timezone,
        documents = input.shipping_document_numbers,
        current = input.current_location,
        pickup = input.pickup_location,
        dropoff = input.dropoff_location,
        cycle_start = float_repr(input.cycle_hours_used),
        driving = summary.driving_hours,
        on_duty = summary.on_duty_hours,
        cycle = input.cycle_hours_used,
        status = compliance_label(summary.is_compliant()),
    )
}
