use chrono::{DateTime, Utc};

use crate::errors::BoardResult;
use crate::word::{Identity, OwnerDeleteResult, SweepReport, UserData, Word, WordId, WordText};

/// The persisted word/vote ledger.
///
/// Every state-changing method is one atomic unit: it either commits all of
/// its effects or none. `now` is supplied by the caller so decay is evaluated
/// against a single instant per action.
pub trait IWordStore: Send + Sync {
    // --- Reads (with lazy purge) ---

    /// Every live word with its effective weight. Fully decayed words are
    /// purged, with their votes, before the list is returned.
    fn list_words(&self, now: DateTime<Utc>) -> BoardResult<Vec<Word>>;

    /// Like `list_words`, hiding creators unless `viewer` is privileged.
    fn list_words_for(&self, viewer: &Identity, now: DateTime<Utc>) -> BoardResult<Vec<Word>>;

    /// One word, or `None` if absent or already decayed to nothing.
    fn get_word(&self, id: WordId, now: DateTime<Utc>) -> BoardResult<Option<Word>>;

    /// Words created and upvoted by `identity`.
    fn user_data(&self, identity: &Identity, now: DateTime<Utc>) -> BoardResult<UserData>;

    /// Run the lazy sweep without returning the words.
    fn sweep(&self, now: DateTime<Utc>) -> BoardResult<SweepReport>;

    // --- Actions ---

    fn create_word(&self, text: &WordText, owner: &Identity, now: DateTime<Utc>)
        -> BoardResult<Word>;

    fn upvote(&self, id: WordId, voter: &Identity, now: DateTime<Utc>) -> BoardResult<Word>;

    fn remove_vote(&self, id: WordId, voter: &Identity, now: DateTime<Utc>) -> BoardResult<()>;

    fn delete_owned(
        &self,
        id: WordId,
        owner: &Identity,
        now: DateTime<Utc>,
    ) -> BoardResult<OwnerDeleteResult>;

    /// Returns the description as stored (trimmed and truncated).
    fn set_description(&self, id: WordId, owner: &Identity, text: &str) -> BoardResult<String>;
}
