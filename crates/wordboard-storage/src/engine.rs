//! StorageEngine: owns the ConnectionPool and the WeightEngine, implements
//! IWordStore, plus the maintenance operations.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use wordboard_core::config::BoardConfig;
use wordboard_core::errors::{BoardError, BoardResult};
use wordboard_core::traits::IWordStore;
use wordboard_core::word::{
    normalize_description, DecayMarker, Identity, Owner, OwnerDeleteResult, SweepReport, UserData,
    Word, WordId, WordRecord, WordText,
};
use wordboard_weight::admission::{self, CreateFacts, UpvoteFacts};
use wordboard_weight::{OwnerDeleteDecision, WeightEngine};

use crate::pool::ConnectionPool;
use crate::queries::{admin, sweep, user_data, vote_ops, word_crud};

/// Path value that selects an in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

/// The ledger. Share one instance across threads; every action is a single
/// immediate transaction on the write connection.
pub struct StorageEngine {
    pool: ConnectionPool,
    engine: WeightEngine,
    config: BoardConfig,
}

impl StorageEngine {
    /// Open (creating if needed) the database file at `path` and migrate it.
    pub fn open(path: &Path, config: BoardConfig) -> BoardResult<Self> {
        let pool = ConnectionPool::open(path, &config.storage)?;
        tracing::info!(path = %path.display(), "opened word store");
        Ok(Self::with_pool(pool, config))
    }

    /// In-memory store. All reads go through the writer.
    pub fn open_in_memory(config: BoardConfig) -> BoardResult<Self> {
        let pool = ConnectionPool::open_in_memory(&config.storage)?;
        Ok(Self::with_pool(pool, config))
    }

    /// Open whatever `config.storage.db_path` names (`:memory:` for in-memory).
    pub fn from_config(config: BoardConfig) -> BoardResult<Self> {
        if config.storage.db_path == IN_MEMORY_PATH {
            return Self::open_in_memory(config);
        }
        let path = config.storage.db_path.clone();
        Self::open(Path::new(&path), config)
    }

    fn with_pool(pool: ConnectionPool, config: BoardConfig) -> Self {
        Self {
            pool,
            engine: WeightEngine::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: the read pool. In-memory: the writer.
    fn with_reader<F, T>(&self, f: F) -> BoardResult<T>
    where
        F: FnOnce(&Connection) -> BoardResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }

    fn is_privileged(&self, identity: &Identity) -> bool {
        self.config.limits.is_privileged(identity)
    }

    // --- Maintenance ---

    /// Every row exactly as stored, decay markers verbatim.
    pub fn dump(&self) -> BoardResult<Vec<WordRecord>> {
        self.with_reader(admin::dump)
    }

    /// Unconditionally delete the word stored as `text`, votes included.
    pub fn delete_by_text(&self, text: &str) -> BoardResult<Option<WordId>> {
        let removed = self
            .pool
            .writer
            .with_immediate_transaction(|conn| admin::delete_by_text(conn, text))?;
        if let Some(word_id) = removed {
            tracing::info!(word_id = %word_id, text, "deleted word by text");
        }
        Ok(removed)
    }

    /// Stored texts containing `fragment`, for "did you mean" hints.
    pub fn find_similar(&self, fragment: &str) -> BoardResult<Vec<String>> {
        self.with_reader(|conn| admin::find_similar(conn, fragment))
    }

    /// Number of upvotes currently recorded on a word.
    pub fn vote_count(&self, id: WordId) -> BoardResult<usize> {
        self.with_reader(|conn| vote_ops::count_votes_on(conn, id))
    }
}

impl IWordStore for StorageEngine {
    fn list_words(&self, now: DateTime<Utc>) -> BoardResult<Vec<Word>> {
        let policy = self.config.decay.malformed_policy;
        self.pool.writer.with_immediate_transaction(|conn| {
            sweep::sweep(conn, &self.engine, policy, now)?;
            let mut words = Vec::new();
            for record in word_crud::all_records(conn)? {
                if let Some(word) = sweep::present(record, &self.engine, policy, now)? {
                    words.push(word);
                }
            }
            Ok(words)
        })
    }

    fn list_words_for(&self, viewer: &Identity, now: DateTime<Utc>) -> BoardResult<Vec<Word>> {
        let words = self.list_words(now)?;
        if self.is_privileged(viewer) {
            return Ok(words);
        }
        Ok(words.into_iter().map(Word::redacted).collect())
    }

    fn get_word(&self, id: WordId, now: DateTime<Utc>) -> BoardResult<Option<Word>> {
        let policy = self.config.decay.malformed_policy;
        self.with_reader(|conn| match word_crud::get_record(conn, id)? {
            Some(record) => sweep::present(record, &self.engine, policy, now),
            None => Ok(None),
        })
    }

    fn user_data(&self, identity: &Identity, now: DateTime<Utc>) -> BoardResult<UserData> {
        let policy = self.config.decay.malformed_policy;
        let is_privileged = self.is_privileged(identity);
        self.with_reader(|conn| {
            user_data::load_user_data(conn, identity, is_privileged, &self.engine, policy, now)
        })
    }

    fn sweep(&self, now: DateTime<Utc>) -> BoardResult<SweepReport> {
        let policy = self.config.decay.malformed_policy;
        self.pool
            .writer
            .with_immediate_transaction(|conn| sweep::sweep(conn, &self.engine, policy, now))
    }

    fn create_word(
        &self,
        text: &WordText,
        owner: &Identity,
        now: DateTime<Utc>,
    ) -> BoardResult<Word> {
        let word = self.pool.writer.with_immediate_transaction(|conn| {
            let owned_words = word_crud::count_owned(conn, owner.as_str())?;
            admission::admit_create(&CreateFacts { owner, owned_words }, &self.config.limits)?;

            if word_crud::find_id_by_text(conn, text.as_str())?.is_some() {
                return Err(BoardError::DuplicateText {
                    text: text.to_string(),
                });
            }

            let state = self.engine.on_create(now);
            let id = word_crud::insert_word(conn, text.as_str(), &state, owner.as_str())?;
            Ok(Word {
                id,
                text: text.to_string(),
                weight: state.weight,
                decay_start: state.decay_start,
                created_by: Some(Owner::User(owner.clone())),
                description: None,
            })
        })?;

        tracing::info!(word_id = %word.id, text = %word.text, identity = %owner, "created word");
        Ok(word)
    }

    fn upvote(&self, id: WordId, voter: &Identity, now: DateTime<Utc>) -> BoardResult<Word> {
        let sees_creators = self.is_privileged(voter);
        let word = self.pool.writer.with_immediate_transaction(|conn| {
            let votes_held = vote_ops::count_votes_by(conn, voter.as_str())?;
            let already_voted = vote_ops::has_vote(conn, voter.as_str(), id)?;
            let record = word_crud::get_record(conn, id)?;
            let owner = record
                .as_ref()
                .map(|r| Owner::from_stored(r.created_by.as_deref()));

            admission::admit_upvote(
                &UpvoteFacts {
                    word_id: id,
                    voter,
                    votes_held,
                    already_voted,
                    owner: owner.as_ref(),
                },
                &self.config.limits,
            )?;
            let (Some(record), Some(owner)) = (record, owner) else {
                return Err(BoardError::NotFound { word_id: id });
            };

            let marker = DecayMarker::parse(record.decay_start.as_deref());
            let state = self
                .engine
                .on_upvote(record.weight, &marker, now)
                .map_err(|rejection| rejection.into_board_error(id))?;

            vote_ops::insert_vote(conn, voter.as_str(), id)?;
            word_crud::update_state(conn, id, &state)?;
            let word = Word {
                id,
                text: record.text,
                weight: state.weight,
                decay_start: state.decay_start,
                created_by: Some(owner),
                description: record.description,
            };
            Ok(if sees_creators { word } else { word.redacted() })
        })?;

        tracing::debug!(word_id = %id, identity = %voter, weight = word.weight, "upvoted");
        Ok(word)
    }

    fn remove_vote(&self, id: WordId, voter: &Identity, now: DateTime<Utc>) -> BoardResult<()> {
        let weight = self.pool.writer.with_immediate_transaction(|conn| {
            let has_vote = vote_ops::has_vote(conn, voter.as_str(), id)?;
            admission::admit_remove_vote(id, voter, has_vote)?;
            vote_ops::delete_vote(conn, voter.as_str(), id)?;

            let Some(record) = word_crud::get_record(conn, id)? else {
                return Ok(None);
            };
            // A word already decayed to nothing stays dead; the next sweep removes it.
            let marker = DecayMarker::parse(record.decay_start.as_deref());
            if self.engine.decayed_weight(record.weight, &marker, now).purge {
                return Ok(None);
            }

            let state = self.engine.on_remove_vote(record.weight, now);
            word_crud::update_state(conn, id, &state)?;
            Ok(Some(state.weight))
        })?;

        tracing::debug!(word_id = %id, identity = %voter, weight = ?weight, "removed vote");
        Ok(())
    }

    fn delete_owned(
        &self,
        id: WordId,
        owner: &Identity,
        now: DateTime<Utc>,
    ) -> BoardResult<OwnerDeleteResult> {
        let result = self.pool.writer.with_immediate_transaction(|conn| {
            let record = word_crud::get_record(conn, id)?;
            let current_owner = record
                .as_ref()
                .map(|r| Owner::from_stored(r.created_by.as_deref()));
            admission::admit_owner_action(id, owner, current_owner.as_ref())?;
            let Some(record) = record else {
                return Err(BoardError::NotFound { word_id: id });
            };

            let marker = DecayMarker::parse(record.decay_start.as_deref());
            match self.engine.on_owner_delete(record.weight, &marker, now) {
                OwnerDeleteDecision::Purge => {
                    word_crud::delete_word(conn, id)?;
                    Ok(OwnerDeleteResult::Purged { word_id: id })
                }
                OwnerDeleteDecision::Orphan(state) => {
                    word_crud::orphan_word(conn, id, &state)?;
                    Ok(OwnerDeleteResult::Orphaned {
                        word: Word {
                            id,
                            text: record.text,
                            weight: state.weight,
                            decay_start: state.decay_start,
                            created_by: Some(Owner::Orphan),
                            description: record.description,
                        },
                    })
                }
            }
        })?;

        match &result {
            OwnerDeleteResult::Purged { word_id } => {
                tracing::info!(word_id = %word_id, identity = %owner, "owner purged word");
            }
            OwnerDeleteResult::Orphaned { word } => {
                tracing::info!(
                    word_id = %word.id,
                    identity = %owner,
                    weight = word.weight,
                    "owner released word"
                );
            }
        }
        Ok(result)
    }

    fn set_description(&self, id: WordId, owner: &Identity, text: &str) -> BoardResult<String> {
        let description = normalize_description(text, self.config.limits.max_description_length);
        self.pool.writer.with_immediate_transaction(|conn| {
            let record = word_crud::get_record(conn, id)?;
            let current_owner = record
                .as_ref()
                .map(|r| Owner::from_stored(r.created_by.as_deref()));
            admission::admit_owner_action(id, owner, current_owner.as_ref())?;
            word_crud::set_description(conn, id, &description)
        })?;

        tracing::debug!(word_id = %id, identity = %owner, "updated description");
        Ok(description)
    }
}
