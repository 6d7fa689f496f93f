//! Export of stored ELD logs to JSON (full records) or CSV (one flat row
//! per log).

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod range;

pub use logic::ExportLogic;

use crate::errors::AppResult;
use crate::models::stored_log::StoredLog;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    fn write(self, logs: &[StoredLog], path: &Path) -> AppResult<()> {
        match self {
            ExportFormat::Csv => json_csv::export_csv(logs, path)?,
            ExportFormat::Json => json_csv::export_json(logs, path)?,
        }
        success(format!(
            "{} export completed: {} log(s) → {}",
            self.as_str().to_uppercase(),
            logs.len(),
            path.display()
        ));
        Ok(())
    }
}
