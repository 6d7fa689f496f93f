use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_recent_logs;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::stored_log::StoredLog;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RED, color_for_remaining};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit, period } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let limit = limit.unwrap_or(cfg.history_limit);

        let logs = match period {
            None => load_recent_logs(&pool, limit)?,
            Some(p) => {
                let (start, end) = parse_range(p)?;
                load_recent_logs(&pool, usize::MAX)?
                    .into_iter()
                    .filter(|l| (start..=end).contains(&l.input.date))
                    .take(limit)
                    .collect()
            }
        };

        if logs.is_empty() {
            info("No ELD logs stored yet.");
            return Ok(());
        }

        print_logs(&logs, cfg);
    }
    Ok(())
}

fn print_logs(logs: &[StoredLog], cfg: &Config) {
    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("DATE", 10),
        Column::new("DRIVER", 6),
        Column::new("TRUCK", 5),
        Column::new("CHANGES", 7),
        Column::new("DRIVE LEFT", 10),
        Column::new("DUTY LEFT", 9),
        Column::new("STATUS", 9),
    ]);

    for log in logs {
        let remaining = log.result.remaining_hours;

        table.add_row(vec![
            (log.id.to_string(), ""),
            (log.input.date.format("%Y-%m-%d").to_string(), ""),
            (truncate(&log.input.driver_name, 24), ""),
            (truncate(&log.input.truck_number, 12), ""),
            (log.input.duty_status_changes.len().to_string(), ""),
            (
                format!("{:.1}", remaining.driving_hours),
                color_for_remaining(remaining.driving_hours),
            ),
            (
                format!("{:.1}", remaining.on_duty_hours),
                color_for_remaining(remaining.on_duty_hours),
            ),
            if log.compliant {
                ("COMPLIANT".to_string(), GREEN)
            } else {
                ("VIOLATION".to_string(), RED)
            },
        ]);
    }

    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    print!("{}", table.render(sep));
}
