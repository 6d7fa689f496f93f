use super::{log_input::LogInput, log_result::LogResult};
use serde::Serialize;

/// A persisted submission, as read back from `eld_logs`.
#[derive(Debug, Clone, Serialize)]
pub struct StoredLog {
    pub id: i64,
    #[serde(flatten)]
    pub input: LogInput,
    #[serde(flatten)]
    pub result: LogResult,
    /// Engine verdict at generation time (`eld_logs.compliant`).
    pub compliant: bool,
    pub created_at: String, // ⇔ eld_logs.created_at (RFC 3339)
    pub updated_at: String, // ⇔ eld_logs.updated_at (RFC 3339)
}
