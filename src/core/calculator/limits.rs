//! Regulatory caps: remaining hours and the compliance verdict.

use crate::models::hos_summary::Violation;
use crate::models::log_result::RemainingHours;
use serde::{Deserialize, Serialize};

/// Hour caps for one jurisdiction. Defaults are the FMCSA property-carrying
/// rules (11 h driving, 14 h on duty, 70 h in 8 days).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HosLimits {
    pub max_driving_hours: f64,
    pub max_on_duty_hours: f64,
    pub max_cycle_hours: f64,
}

impl Default for HosLimits {
    fn default() -> Self {
        Self {
            max_driving_hours: 11.0,
            max_on_duty_hours: 14.0,
            max_cycle_hours: 70.0,
        }
    }
}

impl HosLimits {
    /// Cycle hours still available after today's on-duty time.
    pub fn cycle_remaining(&self, cycle_hours_used: f64, on_duty_hours: f64) -> f64 {
        (self.max_cycle_hours - cycle_hours_used - on_duty_hours).max(0.0)
    }

    /// Remaining driving / on-duty hours: the daily allowance, capped by what
    /// is left of the cycle, rounded to one decimal.
    pub fn remaining(
        &self,
        driving_hours: f64,
        on_duty_hours: f64,
        cycle_hours_used: f64,
    ) -> RemainingHours {
        let driving_raw = (self.max_driving_hours - driving_hours).max(0.0);
        let on_duty_raw = (self.max_on_duty_hours - on_duty_hours).max(0.0);
        let cycle = self.cycle_remaining(cycle_hours_used, on_duty_hours);

        RemainingHours {
            driving_hours: round1(driving_raw.min(cycle)),
            on_duty_hours: round1(on_duty_raw.min(cycle)),
        }
    }

    /// Every cap the day exceeds; empty means compliant. Reaching a cap
    /// exactly is still compliant.
    pub fn violations(
        &self,
        driving_hours: f64,
        on_duty_hours: f64,
        cycle_hours_used: f64,
    ) -> Vec<Violation> {
        let mut out = Vec::new();

        if driving_hours > self.max_driving_hours {
            out.push(Violation::DailyDriving);
        }
        if on_duty_hours > self.max_on_duty_hours {
            out.push(Violation::DailyOnDuty);
        }
        if cycle_hours_used + on_duty_hours > self.max_cycle_hours {
            out.push(Violation::Cycle);
        }

        out
    }
}

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    let r = (value * 10.0).round() / 10.0;
    // avoid printing "-0.0"
    if r == 0.0 { 0.0 } else { r }
}
