//! The word model: identifiers, identities, normalized text, decay markers,
//! and the read-side shapes the store hands back.

pub mod decay_marker;
pub mod identity;
pub mod ledger;
pub mod text;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use decay_marker::{format_timestamp, parse_timestamp, DecayMarker};
pub use identity::{Identity, Owner};
pub use ledger::{OwnerDeleteResult, SweepReport, UserData, WordRecord};
pub use text::{normalize_description, WordText};

/// Row identifier of a word. Assigned by the store, never reused for another word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub i64);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for WordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A word as seen by a reader: weight is the effective (decay-evaluated)
/// value at the instant of the read, not necessarily the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub weight: f64,
    /// Present iff the word is in the decaying regime.
    pub decay_start: Option<DateTime<Utc>>,
    /// `None` when hidden from the viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Owner>,
    pub description: Option<String>,
}

impl Word {
    pub fn is_decaying(&self) -> bool {
        self.decay_start.is_some()
    }

    /// Drop the creator field before handing the word to an unprivileged viewer.
    pub fn redacted(mut self) -> Self {
        self.created_by = None;
        self
    }
}
