//! V002: creator-editable description column.

use rusqlite::Connection;

pub const MIGRATION_SQL: &str = "ALTER TABLE words ADD COLUMN description TEXT;";

/// Older databases may already carry the column; only add it when missing.
pub fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    if has_column(conn, "words", "description")? {
        return Ok(());
    }
    conn.execute_batch(MIGRATION_SQL)
}

fn has_column(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}
