use super::duty_change::DutyStatusChange;
use crate::core::calculator::clock::parse_time;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything submitted for one driver-day.
///
/// Metadata fields are opaque to the engine and only end up on the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogInput {
    pub driver_name: String,
    pub date: NaiveDate,
    pub truck_number: String,
    pub trailer_number: String,
    pub carrier_name: String,
    pub home_terminal_timezone: String,
    pub shipping_document_numbers: String,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_hours_used: f64,
    #[serde(default)]
    pub duty_status_changes: Vec<DutyStatusChange>,
}

impl LogInput {
    /// Load a log input from a `.json` file, or YAML for any other extension.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let input = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        Ok(input)
    }

    /// Boundary validation. The engine accepts anything; this is where bad
    /// submissions are turned away.
    ///
    /// With `strict_times` a time the clock parser does not recognise is an
    /// error; otherwise it is left in and the engine reads it as midnight.
    pub fn validate(&self, strict_times: bool) -> AppResult<()> {
        let text_fields: [(&str, &str, usize); 9] = [
            ("driver_name", &self.driver_name, 255),
            ("truck_number", &self.truck_number, 100),
            ("trailer_number", &self.trailer_number, 100),
            ("carrier_name", &self.carrier_name, 255),
            ("home_terminal_timezone", &self.home_terminal_timezone, 50),
            (
                "shipping_document_numbers",
                &self.shipping_document_numbers,
                usize::MAX,
            ),
            ("current_location", &self.current_location, 255),
            ("pickup_location", &self.pickup_location, 255),
            ("dropoff_location", &self.dropoff_location, 255),
        ];

        for (name, value, max_len) in text_fields {
            check_text(name, value, max_len)?;
        }

        if !self.cycle_hours_used.is_finite() || self.cycle_hours_used < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "cycle_hours_used must be a non-negative number, got {}",
                self.cycle_hours_used
            )));
        }

        for (i, change) in self.duty_status_changes.iter().enumerate() {
            check_text(
                &format!("duty_status_changes[{i}].location"),
                &change.location,
                255,
            )?;

            if change.time.chars().count() > 20 {
                return Err(AppError::InvalidTime(change.time.clone()));
            }

            if strict_times && parse_time(&change.time).is_none() {
                return Err(AppError::InvalidTime(change.time.clone()));
            }
        }

        Ok(())
    }

    /// Renumber `order` to the position of each change in the list, the way
    /// it is persisted.
    pub fn assign_order(&mut self) {
        for (i, change) in self.duty_status_changes.iter_mut().enumerate() {
            change.order = i as u32;
        }
    }
}

fn check_text(name: &str, value: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{name} may not be blank")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::InvalidInput(format!(
            "{name} is longer than {max_len} characters"
        )));
    }
    Ok(())
}
