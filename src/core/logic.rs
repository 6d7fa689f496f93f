use crate::core::calculator::limits::HosLimits;
use crate::core::calculator::timeline;
use crate::core::sheet;
use crate::models::duty_change::DutyStatusChange;
use crate::models::hos_summary::HosSummary;
use crate::models::log_input::LogInput;
use crate::models::log_result::LogResult;

pub struct Core;

impl Core {
    /// Timeline, totals, remaining hours and verdict for one day.
    pub fn build_daily_summary(
        changes: &[DutyStatusChange],
        cycle_hours_used: f64,
        limits: &HosLimits,
    ) -> HosSummary {
        let timeline = timeline::build_timeline(changes);
        let driving_hours = timeline.driving_hours();
        let on_duty_hours = timeline.on_duty_hours();

        HosSummary {
            remaining: limits.remaining(driving_hours, on_duty_hours, cycle_hours_used),
            violations: limits.violations(driving_hours, on_duty_hours, cycle_hours_used),
            timeline,
            driving_hours,
            on_duty_hours,
            cycle_hours_used,
        }
    }

    /// The engine entry point: summary plus the result that gets persisted.
    ///
    /// Total over any input; validation is the caller's job.
    pub fn generate_log(input: &LogInput, limits: &HosLimits) -> (HosSummary, LogResult) {
        let summary =
            Self::build_daily_summary(&input.duty_status_changes, input.cycle_hours_used, limits);

        let result = LogResult {
            log_sheet: sheet::render_log_sheet(input, &summary),
            remaining_hours: summary.remaining,
        };

        (summary, result)
    }
}
