//! Spreadsheet-style store kept in a shared SQLite file.
//!
//! Each sheet is an ordered list of rows, each row a JSON array of text cells.
//! Row 1 is the header written by `init`.

use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::remote::RemoteStore;
use rusqlite::params;

pub struct SheetStore {
    pool: DbPool,
    sheet: String,
}

impl SheetStore {
    /// Open the sheet `sheet` in the store at `path`. The store must already exist.
    pub fn open(path: &str, sheet: &str) -> AppResult<Self> {
        let pool = DbPool::open_existing(path).map_err(|e| unavailable(path, e))?;

        let store = Self {
            pool,
            sheet: sheet.to_string(),
        };
        store.ensure_exists()?;
        Ok(store)
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet
    }

    /// Every row of the sheet, header included, as raw cells.
    pub fn get_all_values(&self) -> AppResult<Vec<Vec<String>>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached(
                "SELECT cells FROM sheet_rows
                 WHERE sheet = ?1
                 ORDER BY row_num ASC, id ASC",
            )
            .map_err(|e| unavailable(&self.sheet, e))?;

        let rows = stmt
            .query_map(params![self.sheet], |row| row.get::<_, String>(0))
            .map_err(|e| unavailable(&self.sheet, e))?;

        let mut out = Vec::new();
        for r in rows {
            let raw = r.map_err(|e| unavailable(&self.sheet, e))?;
            // A row that is not a JSON array of strings counts as empty.
            out.push(serde_json::from_str::<Vec<String>>(&raw).unwrap_or_default());
        }
        Ok(out)
    }

    /// Append raw cells after the last row.
    pub fn append_row(&self, cells: &[String]) -> AppResult<()> {
        let encoded =
            serde_json::to_string(cells).map_err(|e| AppError::RemoteUnavailable(e.to_string()))?;

        self.pool
            .conn
            .execute(
                "INSERT INTO sheet_rows (sheet, row_num, cells)
                 SELECT ?1, IFNULL(MAX(row_num), 0) + 1, ?2
                 FROM sheet_rows WHERE sheet = ?1",
                params![self.sheet, encoded],
            )
            .map_err(|e| unavailable(&self.sheet, e))?;
        Ok(())
    }

    /// Record an operation in the store's internal log.
    pub fn journal(&self, operation: &str, target: &str, message: &str) {
        ttlog_soft(&self.pool.conn, operation, target, message);
    }

    fn ensure_exists(&self) -> AppResult<()> {
        let found: i64 = self
            .pool
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sheet_rows WHERE sheet = ?1",
                params![self.sheet],
                |row| row.get(0),
            )
            .map_err(|e| unavailable(&self.sheet, e))?;

        if found == 0 {
            return Err(AppError::RemoteUnavailable(format!(
                "sheet '{}' not found (run `treeqr init`)",
                self.sheet
            )));
        }
        Ok(())
    }
}

impl RemoteStore for SheetStore {
    fn fetch_all_entries(&self) -> AppResult<Vec<Entry>> {
        Ok(self
            .get_all_values()?
            .into_iter()
            .skip(1)
            .filter_map(|cells| Entry::from_row(&cells))
            .collect())
    }

    fn append_entry(&self, entry: &Entry) -> AppResult<()> {
        self.append_row(&entry.to_row())?;
        self.journal("append", &entry.identifier, "Row appended to sheet");
        Ok(())
    }
}

fn unavailable(target: &str, e: rusqlite::Error) -> AppError {
    AppError::RemoteUnavailable(format!("{target}: {e}"))
}
