//! Maintenance queries: raw dump, delete by text, "did you mean" lookup.

use rusqlite::{params, Connection};

use wordboard_core::errors::BoardResult;
use wordboard_core::word::{WordId, WordRecord};

use super::word_crud;
use crate::to_storage_err;

/// Upper bound on suggestions returned by `find_similar`.
const MAX_SUGGESTIONS: usize = 10;

/// Every row exactly as stored.
pub fn dump(conn: &Connection) -> BoardResult<Vec<WordRecord>> {
    word_crud::all_records(conn)
}

/// Delete the word whose stored text is exactly `text`, regardless of owner
/// or weight. Returns the removed id.
pub fn delete_by_text(conn: &Connection, text: &str) -> BoardResult<Option<WordId>> {
    let Some(id) = word_crud::find_id_by_text(conn, text)? else {
        return Ok(None);
    };
    word_crud::delete_word(conn, id)?;
    Ok(Some(id))
}

/// Stored texts containing `fragment` as a substring.
pub fn find_similar(conn: &Connection, fragment: &str) -> BoardResult<Vec<String>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT text FROM words WHERE text LIKE ?1 ESCAPE '\\' ORDER BY text LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let pattern = format!("%{}%", escape_like(fragment));
    let rows = stmt
        .query_map(params![pattern, MAX_SUGGESTIONS as i64], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(result)
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
