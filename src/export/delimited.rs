use crate::errors::{AppError, AppResult};
use crate::models::{COLUMNS, Entry};
use ::csv::Writer;

/// Serialize entries as UTF-8 CSV: header row, then one row per entry.
pub fn to_delimited_text(entries: &[Entry]) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(COLUMNS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for entry in entries {
        wtr.write_record(entry.to_row())
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}
