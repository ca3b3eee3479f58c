//! Result shapes returned by store operations.

use serde::{Deserialize, Serialize};

use super::{Identity, Word, WordId};

/// Raw persisted row, decay marker and owner shown verbatim. Used by maintenance dumps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: WordId,
    pub text: String,
    pub weight: f64,
    pub decay_start: Option<String>,
    pub created_by: Option<String>,
    pub description: Option<String>,
}

/// What an owner delete did to the word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OwnerDeleteResult {
    /// The word and all of its upvotes are gone.
    Purged { word_id: WordId },
    /// The word survives, decremented and without an owner.
    Orphaned { word: Word },
}

/// Per-identity view: the words it created and the words it upvoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub identity: Identity,
    pub created: Vec<Word>,
    pub upvoted: Vec<Word>,
    pub is_privileged: bool,
}

/// Outcome of one lazy sweep over the ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub scanned: usize,
    pub purged: Vec<WordId>,
    pub repaired: usize,
}
