use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, or_placeholder};
use rusqlite::{OptionalExtension, params};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str, sheet: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    // Row 1 is the header.
    let rows: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM sheet_rows WHERE sheet = ?1",
        params![sheet],
        |row| row.get(0),
    )?;
    println!(
        "{}• Sheet '{}':{} {}{}{} data rows",
        CYAN,
        sheet,
        RESET,
        GREEN,
        (rows - 1).max(0),
        RESET
    );

    let (objects, bytes): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), IFNULL(SUM(LENGTH(data)), 0) FROM media_objects",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Media objects:{} {}{}{} ({:.2} MB)",
        CYAN,
        RESET,
        GREEN,
        objects,
        RESET,
        bytes as f64 / (1024.0 * 1024.0)
    );

    let last_append: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM log WHERE operation = 'append' ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!(
        "{}• Last append:{} {}",
        CYAN,
        RESET,
        or_placeholder(last_append)
    );

    println!();
    Ok(())
}
