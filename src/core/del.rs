use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_log, load_log};
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        // fails with LogNotFound before anything is touched
        let log = load_log(pool, id)?;

        delete_log(pool, id)?;

        ttlog_or_warn(
            &pool.conn,
            "del",
            &format!("#{id}"),
            &format!(
                "Deleted ELD log for {} on {}",
                log.input.driver_name, log.input.date
            ),
        );

        info(format!(
            "Deleted log #{} ({} change(s))",
            id,
            log.input.duty_status_changes.len()
        ));
        Ok(())
    }
}
