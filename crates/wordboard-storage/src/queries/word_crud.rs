//! words table CRUD.

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension, Row};

use wordboard_core::constants::ORPHAN_SENTINEL;
use wordboard_core::errors::BoardResult;
use wordboard_core::word::{format_timestamp, WordId, WordRecord};
use wordboard_weight::WeightState;

use crate::to_storage_err;

const SELECT_WORD: &str =
    "SELECT id, text, weight, decay_start, created_by, description FROM words";

pub(crate) fn row_to_record(row: &Row<'_>) -> rusqlite::Result<WordRecord> {
    Ok(WordRecord {
        id: WordId(row.get(0)?),
        text: row.get(1)?,
        weight: row.get(2)?,
        decay_start: marker_text(row.get_ref(3)?),
        created_by: row.get(4)?,
        description: row.get(5)?,
    })
}

/// The marker column has NUMERIC affinity in older databases, so whatever was
/// written there comes back as text for the marker parser to judge.
fn marker_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    }
}

/// Fetch one raw row.
pub fn get_record(conn: &Connection, id: WordId) -> BoardResult<Option<WordRecord>> {
    conn.prepare_cached(&format!("{SELECT_WORD} WHERE id = ?1"))
        .and_then(|mut stmt| stmt.query_row(params![id.0], row_to_record).optional())
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Every raw row, oldest first.
pub fn all_records(conn: &Connection) -> BoardResult<Vec<WordRecord>> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_WORD} ORDER BY id"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], row_to_record)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(result)
}

/// Raw rows created by `owner`, oldest first.
pub fn records_created_by(conn: &Connection, owner: &str) -> BoardResult<Vec<WordRecord>> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_WORD} WHERE created_by = ?1 ORDER BY id"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![owner], row_to_record)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(result)
}

pub fn find_id_by_text(conn: &Connection, text: &str) -> BoardResult<Option<WordId>> {
    conn.query_row(
        "SELECT id FROM words WHERE text = ?1",
        params![text],
        |row| row.get(0).map(WordId),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Words currently attributed to `owner`. Orphans never match a real identity.
pub fn count_owned(conn: &Connection, owner: &str) -> BoardResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM words WHERE created_by = ?1",
            params![owner],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Insert a new word. The caller has already checked for a duplicate.
pub fn insert_word(
    conn: &Connection,
    text: &str,
    state: &WeightState,
    created_by: &str,
) -> BoardResult<WordId> {
    conn.execute(
        "INSERT INTO words (text, weight, decay_start, created_by) VALUES (?1, ?2, ?3, ?4)",
        params![
            text,
            state.weight,
            state.decay_start.map(format_timestamp),
            created_by
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(WordId(conn.last_insert_rowid()))
}

/// Persist a new weight and decay marker.
pub fn update_state(conn: &Connection, id: WordId, state: &WeightState) -> BoardResult<()> {
    conn.execute(
        "UPDATE words SET weight = ?2, decay_start = ?3 WHERE id = ?1",
        params![id.0, state.weight, state.decay_start.map(format_timestamp)],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Persist a new state and detach the word from its creator.
pub fn orphan_word(conn: &Connection, id: WordId, state: &WeightState) -> BoardResult<()> {
    conn.execute(
        "UPDATE words SET weight = ?2, decay_start = ?3, created_by = ?4 WHERE id = ?1",
        params![
            id.0,
            state.weight,
            state.decay_start.map(format_timestamp),
            ORPHAN_SENTINEL
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Rewrite only the decay marker (sweep repair).
pub fn set_marker(conn: &Connection, id: WordId, marker: Option<&str>) -> BoardResult<()> {
    conn.execute(
        "UPDATE words SET decay_start = ?2 WHERE id = ?1",
        params![id.0, marker],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn set_description(conn: &Connection, id: WordId, description: &str) -> BoardResult<()> {
    conn.execute(
        "UPDATE words SET description = ?2 WHERE id = ?1",
        params![id.0, description],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Delete a word. Its upvotes go with it through the foreign key cascade.
/// Returns whether a row was removed.
pub fn delete_word(conn: &Connection, id: WordId) -> BoardResult<bool> {
    let deleted = conn
        .execute("DELETE FROM words WHERE id = ?1", params![id.0])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted > 0)
}
