use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::duty_change::DutyStatusChange;
use crate::models::duty_status::DutyStatus;
use crate::models::log_input::LogInput;
use crate::models::log_result::{LogResult, RemainingHours};
use crate::models::stored_log::StoredLog;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_LOGS: &str = "SELECT id, driver_name, date, truck_number, trailer_number,
        carrier_name, home_terminal_timezone, shipping_document_numbers,
        current_location, pickup_location, dropoff_location, cycle_hours_used,
        log_sheet, remaining_driving_hours, remaining_on_duty_hours,
        compliant, created_at, updated_at
     FROM eld_logs";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

/// Map an `eld_logs` row. Changes are loaded separately.
pub fn map_log_row(row: &Row) -> Result<StoredLog> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    Ok(StoredLog {
        id: row.get("id")?,
        input: LogInput {
            driver_name: row.get("driver_name")?,
            date,
            truck_number: row.get("truck_number")?,
            trailer_number: row.get("trailer_number")?,
            carrier_name: row.get("carrier_name")?,
            home_terminal_timezone: row.get("home_terminal_timezone")?,
            shipping_document_numbers: row.get("shipping_document_numbers")?,
            current_location: row.get("current_location")?,
            pickup_location: row.get("pickup_location")?,
            dropoff_location: row.get("dropoff_location")?,
            cycle_hours_used: row.get("cycle_hours_used")?,
            duty_status_changes: Vec::new(),
        },
        result: LogResult {
            log_sheet: row.get("log_sheet")?,
            remaining_hours: RemainingHours {
                driving_hours: row.get("remaining_driving_hours")?,
                on_duty_hours: row.get("remaining_on_duty_hours")?,
            },
        },
        compliant: row.get("compliant")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn map_change_row(row: &Row) -> Result<DutyStatusChange> {
    let status_str: String = row.get("status")?;
    let status = DutyStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidStatus(status_str.clone())))?;

    Ok(DutyStatusChange {
        time: row.get("time")?,
        location: row.get("location")?,
        status,
        order: row.get("ord")?,
    })
}

pub fn load_changes(conn: &Connection, log_id: i64) -> AppResult<Vec<DutyStatusChange>> {
    let mut stmt = conn.prepare_cached(
        "SELECT time, location, status, ord FROM duty_status_changes
         WHERE log_id = ?1
         ORDER BY ord ASC, id ASC",
    )?;

    let rows = stmt.query_map([log_id], map_change_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn with_changes(conn: &Connection, mut logs: Vec<StoredLog>) -> AppResult<Vec<StoredLog>> {
    for log in &mut logs {
        log.input.duty_status_changes = load_changes(conn, log.id)?;
    }
    Ok(logs)
}

/// Persist a submission and its changes in one transaction.
/// `order` is taken from the changes as given; callers renumber first.
/// `compliant` is the engine's verdict, stored next to the sheet so it never
/// has to be read back out of the text.
pub fn insert_log(
    pool: &mut DbPool,
    input: &LogInput,
    result: &LogResult,
    compliant: bool,
) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    let id = pool.with_conn(|conn| {
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO eld_logs (driver_name, date, truck_number, trailer_number,
                carrier_name, home_terminal_timezone, shipping_document_numbers,
                current_location, pickup_location, dropoff_location, cycle_hours_used,
                log_sheet, remaining_driving_hours, remaining_on_duty_hours,
                compliant, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
            params![
                input.driver_name,
                input.date.format("%Y-%m-%d").to_string(),
                input.truck_number,
                input.trailer_number,
                input.carrier_name,
                input.home_terminal_timezone,
                input.shipping_document_numbers,
                input.current_location,
                input.pickup_location,
                input.dropoff_location,
                input.cycle_hours_used,
                result.log_sheet,
                result.remaining_hours.driving_hours,
                result.remaining_hours.on_duty_hours,
                compliant,
                now,
                now,
            ],
        )?;

        let id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO duty_status_changes (log_id, time, location, status, ord)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for change in &input.duty_status_changes {
                stmt.execute(params![
                    id,
                    change.time,
                    change.location,
                    change.status.to_db_str(),
                    change.order,
                ])?;
            }
        }

        tx.commit()?;
        Ok(id)
    })?;

    Ok(id)
}

pub fn load_log(pool: &DbPool, id: i64) -> AppResult<StoredLog> {
    let sql = format!("{SELECT_LOGS} WHERE id = ?1");
    let log = pool
        .conn
        .query_row(&sql, [id], map_log_row)
        .optional()?
        .ok_or(AppError::LogNotFound(id))?;

    let mut logs = with_changes(&pool.conn, vec![log])?;
    logs.pop().ok_or(AppError::LogNotFound(id))
}

/// Most recent logs first.
pub fn load_recent_logs(pool: &DbPool, limit: usize) -> AppResult<Vec<StoredLog>> {
    let sql = format!("{SELECT_LOGS} ORDER BY created_at DESC, id DESC LIMIT ?1");
    let mut stmt = pool.conn.prepare(&sql)?;
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let rows = stmt.query_map([limit], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    with_changes(&pool.conn, out)
}

/// Every log, oldest first (export order).
pub fn load_all_logs(pool: &DbPool) -> AppResult<Vec<StoredLog>> {
    let sql = format!("{SELECT_LOGS} ORDER BY id ASC");
    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    with_changes(&pool.conn, out)
}

/// Delete a log; its changes go with it (ON DELETE CASCADE).
pub fn delete_log(pool: &DbPool, id: i64) -> AppResult<()> {
    let n = pool
        .conn
        .execute("DELETE FROM eld_logs WHERE id = ?1", [id])?;

    if n == 0 {
        return Err(AppError::LogNotFound(id));
    }
    Ok(())
}
