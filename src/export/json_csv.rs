use crate::errors::{AppError, AppResult};
use crate::export::model::LogExport;
use crate::models::stored_log::StoredLog;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: full records, changes included.
pub(crate) fn export_json(logs: &[StoredLog], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(logs)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}

/// Export CSV (header from serde field names).
pub(crate) fn export_csv(logs: &[StoredLog], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for log in logs {
        wtr.serialize(LogExport::from(log))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    Ok(())
}
