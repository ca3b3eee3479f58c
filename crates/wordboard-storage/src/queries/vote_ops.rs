//! upvotes table queries.

use rusqlite::{params, Connection, OptionalExtension};

use wordboard_core::errors::BoardResult;
use wordboard_core::word::WordId;

use crate::to_storage_err;

/// Upvotes currently held by `identity`, across all words.
pub fn count_votes_by(conn: &Connection, identity: &str) -> BoardResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM upvotes WHERE user_email = ?1",
            params![identity],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

pub fn has_vote(conn: &Connection, identity: &str, word_id: WordId) -> BoardResult<bool> {
    conn.query_row(
        "SELECT 1 FROM upvotes WHERE user_email = ?1 AND word_id = ?2",
        params![identity, word_id.0],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn insert_vote(conn: &Connection, identity: &str, word_id: WordId) -> BoardResult<()> {
    conn.execute(
        "INSERT INTO upvotes (user_email, word_id) VALUES (?1, ?2)",
        params![identity, word_id.0],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Returns whether a vote was removed.
pub fn delete_vote(conn: &Connection, identity: &str, word_id: WordId) -> BoardResult<bool> {
    let deleted = conn
        .execute(
            "DELETE FROM upvotes WHERE user_email = ?1 AND word_id = ?2",
            params![identity, word_id.0],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted > 0)
}

/// Ids of the words `identity` has upvoted, oldest vote first.
pub fn voted_word_ids(conn: &Connection, identity: &str) -> BoardResult<Vec<WordId>> {
    let mut stmt = conn
        .prepare_cached("SELECT word_id FROM upvotes WHERE user_email = ?1 ORDER BY id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![identity], |row| row.get(0).map(WordId))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(result)
}

/// Total upvotes on one word.
pub fn count_votes_on(conn: &Connection, word_id: WordId) -> BoardResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM upvotes WHERE word_id = ?1",
            params![word_id.0],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
