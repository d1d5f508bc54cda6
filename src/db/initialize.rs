use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::models::COLUMNS;
use rusqlite::{Connection, params};

/// Initialize the store: run migrations, then make sure `sheet` has its header row.
pub fn init_db(conn: &Connection, sheet: &str) -> AppResult<()> {
    run_pending_migrations(conn)?;
    ensure_sheet(conn, sheet)?;
    Ok(())
}

/// Create the sheet by writing the header as row 1. Returns true if it was created.
pub fn ensure_sheet(conn: &Connection, sheet: &str) -> AppResult<bool> {
    let rows: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sheet_rows WHERE sheet = ?1",
        params![sheet],
        |row| row.get(0),
    )?;

    if rows > 0 {
        return Ok(false);
    }

    let header = serde_json::to_string(&COLUMNS)
        .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
    conn.execute(
        "INSERT INTO sheet_rows (sheet, row_num, cells) VALUES (?1, 1, ?2)",
        params![sheet, header],
    )?;
    Ok(true)
}
