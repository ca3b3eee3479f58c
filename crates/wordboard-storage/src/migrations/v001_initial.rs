//! V001: words and upvotes.
//!
//! `IF NOT EXISTS` throughout so a database created by the earlier
//! deployment (same tables, no `user_version`) is adopted as-is.

use rusqlite::Connection;

pub const MIGRATION_SQL: &str = r#"
-- Words: one row per normalized tag. AUTOINCREMENT keeps ids from being reused.
CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL UNIQUE,
    weight REAL NOT NULL DEFAULT 1,
    decay_start TIMESTAMP,
    created_by TEXT
);

CREATE INDEX IF NOT EXISTS idx_words_created_by ON words(created_by);

-- Upvotes: at most one per (user, word); removed with their word.
CREATE TABLE IF NOT EXISTS upvotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_email TEXT NOT NULL,
    word_id INTEGER NOT NULL,
    UNIQUE(user_email, word_id),
    FOREIGN KEY(word_id) REFERENCES words(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_upvotes_word ON upvotes(word_id);
"#;

pub fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(MIGRATION_SQL)
}
