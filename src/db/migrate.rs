use crate::core::sheet::VIOLATION_LABEL;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations are tracked in it, so it
/// has to be there before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create `eld_logs` and `duty_status_changes`.
fn create_log_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS eld_logs (
            id                        INTEGER PRIMARY KEY AUTOINCREMENT,
            driver_name               TEXT NOT NULL,
            date                      TEXT NOT NULL,
            truck_number              TEXT NOT NULL,
            trailer_number            TEXT NOT NULL,
            carrier_name              TEXT NOT NULL,
            home_terminal_timezone    TEXT NOT NULL,
            shipping_document_numbers TEXT NOT NULL,
            current_location          TEXT NOT NULL,
            pickup_location           TEXT NOT NULL,
            dropoff_location          TEXT NOT NULL,
            cycle_hours_used          REAL NOT NULL CHECK(cycle_hours_used >= 0),
            log_sheet                 TEXT NOT NULL,
            remaining_driving_hours   REAL NOT NULL,
            remaining_on_duty_hours   REAL NOT NULL,
            created_at                TEXT NOT NULL,
            updated_at                TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS duty_status_changes (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            log_id    INTEGER NOT NULL REFERENCES eld_logs(id) ON DELETE CASCADE,
            time      TEXT NOT NULL,
            location  TEXT NOT NULL,
            status    TEXT NOT NULL CHECK(status IN
                        ('Off Duty','Sleeper Berth','Driving','On Duty (Not Driving)')),
            ord       INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

fn create_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_eld_logs_created ON eld_logs(created_at);
        CREATE INDEX IF NOT EXISTS idx_eld_logs_date ON eld_logs(date);
        CREATE INDEX IF NOT EXISTS idx_changes_log_ord ON duty_status_changes(log_id, ord);
        "#,
    )?;
    Ok(())
}

/// Store the verdict in its own column. Rows written before this migration
/// only have the sheet: they are marked from its closing status line, which
/// is followed by the fixed footer and so cannot come from user text above it.
fn add_compliant_column(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "ALTER TABLE eld_logs ADD COLUMN compliant INTEGER NOT NULL DEFAULT 1;",
    )?;

    let status_line = format!(
        "COMPLIANCE STATUS: {VIOLATION_LABEL}\n\nThis log was generated electronically"
    );
    conn.execute(
        "UPDATE eld_logs SET compliant = 0 WHERE instr(log_sheet, ?1) > 0",
        [status_line],
    )?;
    Ok(())
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const MIGRATIONS: [Migration; 3] = [
    (
        "20250301_0001_create_eld_tables",
        "Created eld_logs and duty_status_changes tables",
        create_log_tables,
    ),
    (
        "20250315_0002_add_history_indexes",
        "Added indexes for log history and change ordering",
        create_indexes,
    ),
    (
        "20250402_0003_add_compliant_column",
        "Added eld_logs.compliant (stored HOS verdict)",
        add_compliant_column,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Called by `db::initialize::init_db` and `db --migrate`. Returns how many
/// migrations were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue; // già applicata
        }

        conn.execute_batch("BEGIN;")?;
        let outcome = apply(conn).and_then(|_| mark_applied(conn, version, message));
        match outcome {
            Ok(()) => conn.execute_batch("COMMIT;")?,
            Err(e) => {
                conn.execute_batch("ROLLBACK;")?;
                return Err(e);
            }
        }

        success(format!("Migration applied: {} → {}", version, message));
        applied += 1;
    }

    Ok(applied)
}
