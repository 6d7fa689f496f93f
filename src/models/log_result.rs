use serde::{Deserialize, Serialize};

/// Hours still available today, already capped by the cycle and rounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RemainingHours {
    pub driving_hours: f64,
    pub on_duty_hours: f64,
}

/// What gets stored for a submission. Never recomputed once persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResult {
    pub log_sheet: String,
    pub remaining_hours: RemainingHours,
}
