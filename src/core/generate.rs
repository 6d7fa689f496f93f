use crate::config::Config;
use crate::core::calculator::clock::parse_time;
use crate::core::logic::Core;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::insert_log;
use crate::errors::AppResult;
use crate::models::hos_summary::HosSummary;
use crate::models::log_input::LogInput;
use crate::models::log_result::LogResult;
use crate::ui::messages::warning;

/// What a submission produced. `id` is `None` for dry runs.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub id: Option<i64>,
    pub summary: HosSummary,
    pub result: LogResult,
}

pub struct GenerateLogic;

impl GenerateLogic {
    /// Validate, compute and (unless `pool` is `None`) persist one day.
    ///
    /// `quiet` suppresses the fallback warnings, for machine-readable output.
    pub fn apply(
        pool: Option<&mut DbPool>,
        mut input: LogInput,
        cfg: &Config,
        quiet: bool,
    ) -> AppResult<GenerateOutcome> {
        input.validate(cfg.strict_time_parsing)?;

        if !quiet {
            for change in &input.duty_status_changes {
                if parse_time(&change.time).is_none() {
                    warning(format!(
                        "Unrecognised time '{}' at {}: counted as midnight",
                        change.time, change.location
                    ));
                }
            }
        }

        input.assign_order();

        let (summary, result) = Core::generate_log(&input, &cfg.limits);

        let id = match pool {
            Some(pool) => {
                let id = insert_log(pool, &input, &result, summary.is_compliant())?;

                ttlog_or_warn(
                    &pool.conn,
                    "generate",
                    &format!("#{id}"),
                    &format!(
                        "ELD log for {} on {} ({} changes, {})",
                        input.driver_name,
                        input.date,
                        input.duty_status_changes.len(),
                        if summary.is_compliant() {
                            "compliant"
                        } else {
                            "violation"
                        }
                    ),
                );

                Some(id)
            }
            None => None,
        };

        Ok(GenerateOutcome {
            id,
            summary,
            result,
        })
    }
}
