use crate::errors::{AppError, AppResult};
use crate::models::Entry;

/// Entries as pretty-printed JSON, keyed by the sheet column names.
pub fn to_json(entries: &[Entry]) -> AppResult<Vec<u8>> {
    serde_json::to_vec_pretty(entries)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}
