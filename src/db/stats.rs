use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let logs: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM eld_logs", [], |row| row.get(0))?;
    let changes: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM duty_status_changes", [], |row| {
            row.get(0)
        })?;
    let violations: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM eld_logs WHERE compliant = 0",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Total logs:{} {}{}{}", CYAN, RESET, GREEN, logs, RESET);
    println!("{}• Duty status changes:{} {}", CYAN, RESET, changes);
    let v_color = if violations > 0 { RED } else { GREEN };
    println!(
        "{}• Logs with violations:{} {}{}{}",
        CYAN, RESET, v_color, violations, RESET
    );

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM eld_logs", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
