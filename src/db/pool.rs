//! Single SQLite connection, opened per command.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing database. `init` creates the file first, so a
    /// missing file here means the user never ran it (or mistyped `--db`).
    pub fn new(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if !p.exists() {
            return Err(AppError::Config(format!(
                "database not found at {}; run `hoslogger init` first",
                p.display()
            )));
        }

        let conn = Connection::open(p)?;
        // ON DELETE CASCADE on duty_status_changes depends on it
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }

    pub fn with_conn<F, T>(&mut self, func: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        func(&mut self.conn)
    }
}
