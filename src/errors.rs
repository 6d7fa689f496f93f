//! Error type shared by every layer of hoslogger.
//!
//! The HOS engine itself never fails; errors come from reading input files,
//! validating submissions, the database, configuration and exports.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // -- submission / user input --
    #[error("Invalid log input: {0}")]
    InvalidInput(String),

    #[error("Invalid time format: {0} (expected e.g. \"7:30 a.m.\")")]
    InvalidTime(String),

    #[error("Invalid duty status: {0}")]
    InvalidStatus(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // -- file formats --
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // -- storage --
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("ELD log #{0} not found")]
    LogNotFound(i64),

    // -- configuration --
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
