use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generate::{GenerateLogic, GenerateOutcome};
use crate::core::sheet::compliance_label;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::log_input::LogInput;
use crate::models::log_result::RemainingHours;
use crate::ui::messages::{field, header, info, success, warning};
use crate::utils::colors::{color_for_compliance, color_for_remaining, paint};
use serde::Serialize;

/// `--json` output: the engine's boundary shape, plus the id when stored.
#[derive(Serialize)]
struct GenerateOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    log_sheet: &'a str,
    remaining_hours: RemainingHours,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        input,
        dry_run,
        json,
    } = cmd
    {
        let log_input = LogInput::from_file(input)?;

        let mut pool = if *dry_run {
            None
        } else {
            Some(DbPool::new(&cfg.database)?)
        };

        let outcome = GenerateLogic::apply(pool.as_mut(), log_input, cfg, *json)?;

        if *json {
            let out = GenerateOutput {
                id: outcome.id,
                log_sheet: &outcome.result.log_sheet,
                remaining_hours: outcome.result.remaining_hours,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            print_outcome(&outcome);
        }
    }

    Ok(())
}

fn print_outcome(outcome: &GenerateOutcome) {
    let title = match outcome.id {
        Some(id) => format!("ELD log #{id}"),
        None => "ELD log (dry run)".to_string(),
    };
    header(title);
    println!("{}\n", outcome.result.log_sheet);

    let remaining = outcome.result.remaining_hours;
    field(
        "Remaining driving hours",
        paint(
            &format!("{:.1}", remaining.driving_hours),
            color_for_remaining(remaining.driving_hours),
        ),
    );
    field(
        "Remaining on-duty hours",
        paint(
            &format!("{:.1}", remaining.on_duty_hours),
            color_for_remaining(remaining.on_duty_hours),
        ),
    );

    let compliant = outcome.summary.is_compliant();
    field(
        "Compliance",
        paint(compliance_label(compliant), color_for_compliance(compliant)),
    );
    for v in &outcome.summary.violations {
        warning(v);
    }

    match outcome.id {
        Some(id) => success(format!("Log saved with id #{id}")),
        None => info("Dry run: nothing was saved."),
    }
}
