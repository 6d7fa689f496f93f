use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_logs;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of stored ELD logs.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a period understood by [`parse_range`]
    ///
    /// Returns how many logs were written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let logs: Vec<_> = load_all_logs(pool)?
            .into_iter()
            .filter(|l| bounds.is_none_or(|(s, e)| (s..=e).contains(&l.input.date)))
            .collect();

        if logs.is_empty() {
            warning("No ELD logs found for the selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        format.write(&logs, path)?;

        ttlog_or_warn(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} log(s) to {}", logs.len(), path.display()),
        );

        Ok(logs.len())
    }
}
