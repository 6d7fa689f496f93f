use super::log_result::RemainingHours;
use crate::core::calculator::timeline::Timeline;
use serde::Serialize;
use std::fmt;

/// Which regulatory cap a day broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Violation {
    DailyDriving,
    DailyOnDuty,
    Cycle,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Violation::DailyDriving => "daily driving limit exceeded",
            Violation::DailyOnDuty => "daily on-duty limit exceeded",
            Violation::Cycle => "cycle limit exceeded",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Default, Clone)]
pub struct HosSummary {
    pub timeline: Timeline,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub cycle_hours_used: f64,
    pub remaining: RemainingHours,
    pub violations: Vec<Violation>,
}

impl HosSummary {
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }
}
