use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ordered schema migrations: (version, description, sql).
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20251019_0001_sheet_rows",
        "Created sheet_rows table",
        r#"
        CREATE TABLE IF NOT EXISTS sheet_rows (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            sheet    TEXT NOT NULL,
            row_num  INTEGER NOT NULL,
            cells    TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_sheet_rows_sheet_row ON sheet_rows(sheet, row_num);
        "#,
    ),
    (
        "20251019_0002_media",
        "Created media_objects and media_permissions tables",
        r#"
        CREATE TABLE IF NOT EXISTS media_objects (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            folder_id   TEXT NOT NULL,
            mime_type   TEXT NOT NULL,
            data        BLOB NOT NULL,
            created_at  TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS media_permissions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            object_id   TEXT NOT NULL REFERENCES media_objects(id),
            grantee     TEXT NOT NULL,
            role        TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_media_permissions_object ON media_permissions(object_id);
        "#,
    ),
];

/// Ensure that the `log` table exists. Migrations are tracked through it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations. Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, description],
        )?;
        tx.commit()?;

        success(format!("Migration applied: {version}"));
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table'
                 AND name IN ('sheet_rows','media_objects','media_permissions','log')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 4);
    }
}
