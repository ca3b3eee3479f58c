use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::word::Identity;

/// Per-identity limits and text bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_words_per_creator: usize,
    pub max_votes_per_user: usize,
    /// Upvotes are refused once a word's effective weight reaches this.
    pub max_weight: f64,
    pub max_text_length: usize,
    pub max_description_length: usize,
    /// Identities exempt from the creation and vote limits. They also see
    /// word creators in listings.
    pub privileged: BTreeSet<String>,
}

impl LimitsConfig {
    pub fn is_privileged(&self, identity: &Identity) -> bool {
        self.privileged.contains(identity.as_str())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_words_per_creator: defaults::DEFAULT_MAX_WORDS_PER_CREATOR,
            max_votes_per_user: defaults::DEFAULT_MAX_VOTES_PER_USER,
            max_weight: defaults::DEFAULT_MAX_WEIGHT,
            max_text_length: defaults::DEFAULT_MAX_TEXT_LENGTH,
            max_description_length: defaults::DEFAULT_MAX_DESCRIPTION_LENGTH,
            privileged: BTreeSet::new(),
        }
    }
}
