use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::timeline::{build_timeline, minutes_to_hours};
use crate::core::grid::{DayGrid, SpanKind};
use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::models::duty_status::DutyStatus;
use crate::models::stored_log::StoredLog;
use crate::ui::messages::{field, header};
use crate::utils::hours2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, json, details } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let log = load_log(&pool, *id)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&log)?);
            return Ok(());
        }

        header(format!("ELD log #{}", log.id));
        // verbatim: never re-rendered
        println!("{}\n", log.result.log_sheet);

        field("Created", &log.created_at);
        field(
            "Remaining driving hours",
            format!("{:.1}", log.result.remaining_hours.driving_hours),
        );
        field(
            "Remaining on-duty hours",
            format!("{:.1}", log.result.remaining_hours.on_duty_hours),
        );

        if *details {
            print_details(&log);
        }
    }

    Ok(())
}

/// 24-hour grid and span list rebuilt from the stored changes, plus the
/// engine totals. Display only; the stored result is left as it was.
fn print_details(log: &StoredLog) {
    let timeline = build_timeline(&log.input.duty_status_changes);
    let grid = DayGrid::from_timeline(&timeline);

    header("Timeline");
    if grid.spans.is_empty() {
        println!("(no duty status changes)");
    } else {
        print!("{}", grid.render());
        println!();
    }

    for span in &grid.spans {
        let note = match span.kind {
            SpanKind::BeforeFirstChange => "(before first change, not counted)",
            SpanKind::ToEndOfDay => "(to end of day, not counted)",
            SpanKind::Bounded => "",
        };
        println!(
            "{:<26} {:<22} {:>8}  {}",
            span.range_label(),
            span.status,
            hours2readable(minutes_to_hours(span.end_minute - span.start_minute)),
            note
        );
    }

    header("Totals");
    for status in DutyStatus::ALL {
        field(
            status,
            hours2readable(minutes_to_hours(timeline.totals.get(status))),
        );
    }
}
