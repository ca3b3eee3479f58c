use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ANONYMOUS_IDENTITY, ORPHAN_SENTINEL};

/// Caller identity string, resolved outside the core (e.g. from a proxy header).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Trimmed identity; blank input falls back to the anonymous identity.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::anonymous()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// First non-blank candidate wins, in order. Mirrors a header chain such as
    /// `X-Auth-Email` then `X-Auth-User`.
    pub fn resolve<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|c| !c.is_empty())
            .map(|c| Self(c.to_string()))
            .unwrap_or_else(Self::anonymous)
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS_IDENTITY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_IDENTITY
    }

    /// The orphan sentinel is reserved; nobody may act under it.
    pub fn is_reserved(&self) -> bool {
        self.0 == ORPHAN_SENTINEL
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current owner of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Owner {
    User(Identity),
    /// The creator relinquished the word; it counts against nobody.
    Orphan,
}

impl Owner {
    /// Decode the persisted `created_by` column. Legacy rows with NULL are orphans.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ORPHAN_SENTINEL) => Owner::Orphan,
            Some(id) => Owner::User(Identity(id.to_string())),
        }
    }

    pub fn as_stored(&self) -> &str {
        match self {
            Owner::User(id) => id.as_str(),
            Owner::Orphan => ORPHAN_SENTINEL,
        }
    }

    /// Orphans are owned by nobody, including an identity spelled like the sentinel.
    pub fn is_owned_by(&self, identity: &Identity) -> bool {
        matches!(self, Owner::User(id) if id == identity)
    }

    pub fn is_orphan(&self) -> bool {
        matches!(self, Owner::Orphan)
    }
}

impl From<String> for Owner {
    fn from(value: String) -> Self {
        Owner::from_stored(Some(&value))
    }
}

impl From<Owner> for String {
    fn from(owner: Owner) -> Self {
        owner.as_stored().to_string()
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_stored())
    }
}
