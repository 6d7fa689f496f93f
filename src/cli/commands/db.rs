use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *show_info) {
        info("Nothing to do: pass --migrate, --check, --info or --vacuum.");
        return Ok(());
    }

    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        header("Migrations");
        match run_pending_migrations(&pool.conn)? {
            0 => info("No pending migrations."),
            n => success(format!("{} migration(s) applied.", n)),
        }
    }

    if *show_info {
        header("Database");
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        header("Integrity");
        check_integrity(&pool)?;
    }

    if *vacuum {
        header("Vacuum");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}

/// `PRAGMA integrity_check` plus orphaned duty status changes, which the
/// integrity check alone does not report.
fn check_integrity(pool: &DbPool) -> AppResult<()> {
    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity != "ok" {
        error(format!("Integrity check failed: {}", integrity));
        return Ok(());
    }

    let orphans: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM duty_status_changes c
         LEFT JOIN eld_logs l ON l.id = c.log_id
         WHERE l.id IS NULL",
        [],
        |row| row.get(0),
    )?;

    if orphans > 0 {
        warning(format!(
            "{} duty status change(s) point to a missing ELD log.",
            orphans
        ));
    }

    success("Integrity check passed.");
    Ok(())
}
