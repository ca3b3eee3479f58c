use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{BoardError, BoardResult};

/// Normalized tag text: lowercase, `[a-z0-9_]` only, bounded length, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordText(String);

impl WordText {
    /// Normalize raw user input.
    ///
    /// Trim, lowercase, spaces to underscores, strip everything outside
    /// `[a-z0-9_]`, then truncate to `max_len` characters.
    /// Input that normalizes to nothing is rejected.
    pub fn normalize(raw: &str, max_len: usize) -> BoardResult<Self> {
        let normalized: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' { '_' } else { c })
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
            .take(max_len)
            .collect();

        if normalized.is_empty() {
            return Err(BoardError::InvalidInput {
                reason: format!("text {raw:?} normalizes to an empty word"),
            });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim a description and cut it to `max_len` characters.
pub fn normalize_description(raw: &str, max_len: usize) -> String {
    raw.trim().chars().take(max_len).collect()
}
