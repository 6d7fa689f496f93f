use crate::models::stored_log::StoredLog;
use serde::Serialize;

/// Flat row for CSV export: one line per stored log.
#[derive(Serialize, Clone, Debug)]
pub struct LogExport {
    pub id: i64,
    pub date: String,
    pub driver_name: String,
    pub carrier_name: String,
    pub truck_number: String,
    pub trailer_number: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_hours_used: f64,
    pub duty_status_changes: usize,
    pub remaining_driving_hours: f64,
    pub remaining_on_duty_hours: f64,
    pub compliant: bool,
    pub created_at: String,
}

impl From<&StoredLog> for LogExport {
    fn from(log: &StoredLog) -> Self {
        let input = &log.input;
        Self {
            id: log.id,
            date: input.date.format("%Y-%m-%d").to_string(),
            driver_name: input.driver_name.clone(),
            carrier_name: input.carrier_name.clone(),
            truck_number: input.truck_number.clone(),
            trailer_number: input.trailer_number.clone(),
            pickup_location: input.pickup_location.clone(),
            dropoff_location: input.dropoff_location.clone(),
            cycle_hours_used: input.cycle_hours_used,
            duty_status_changes: input.duty_status_changes.len(),
            remaining_driving_hours: log.result.remaining_hours.driving_hours,
            remaining_on_duty_hours: log.result.remaining_hours.on_duty_hours,
            compliant: log.compliant,
            created_at: log.created_at.clone(),
        }
    }
}
