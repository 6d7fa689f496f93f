use super::duty_status::DutyStatus;
use serde::{Deserialize, Serialize};

/// One entry of the daily log grid: `status` starts at `time` and lasts
/// until the next change (in clock order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyStatusChange {
    pub time: String,     // ⇔ duty_status_changes.time ("7:30 a.m.")
    pub location: String, // ⇔ duty_status_changes.location
    pub status: DutyStatus,
    #[serde(default)]
    pub order: u32, // ⇔ duty_status_changes.ord
}

impl DutyStatusChange {
    pub fn new(time: &str, location: &str, status: DutyStatus) -> Self {
        Self {
            time: time.to_string(),
            location: location.to_string(),
            status,
            order: 0,
        }
    }

    /// Line used in the "DUTY STATUS CHANGES" section of the sheet.
    pub fn sheet_line(&self) -> String {
        format!(
            "- Time: {}, Location: {}, Status: {}",
            self.time, self.location, self.status
        )
    }
}
