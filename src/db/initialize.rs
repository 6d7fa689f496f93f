use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::ui::messages::info;
use rusqlite::Connection;

/// Initialize the database.
/// Schema creation and upgrades all live in the migration list; this only
/// runs it and reports when the schema was already current.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    let applied = run_pending_migrations(conn)?;

    if applied == 0 {
        info("Database schema is up to date.");
    }

    Ok(())
}
