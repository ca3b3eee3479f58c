use super::config_error::ConfigError;
use super::error_code::{self, ErrorCode};
use super::storage_error::StorageError;
use crate::word::WordId;

/// Result alias used across the workspace.
pub type BoardResult<T> = Result<T, BoardError>;

/// Every way a board action can fail.
///
/// Caller mistakes and rule rejections carry the word or limit involved;
/// storage and config failures wrap their subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("word already exists: {text}")]
    DuplicateText { text: String },

    #[error("creator limit reached: at most {limit} words per creator")]
    CreatorLimitExceeded { limit: usize },

    #[error("voter limit reached: at most {limit} upvotes per user")]
    VoterLimitExceeded { limit: usize },

    #[error("already voted on word {word_id}")]
    AlreadyVoted { word_id: WordId },

    #[error("cannot upvote own word {word_id}")]
    SelfVote { word_id: WordId },

    #[error("word {word_id} has reached the maximum weight {max_weight}")]
    MaxWeightReached { word_id: WordId, max_weight: f64 },

    #[error("word {word_id} has expired")]
    WordExpired { word_id: WordId },

    #[error("word not found: {word_id}")]
    NotFound { word_id: WordId },

    #[error("identity {identity} is not the creator of word {word_id}")]
    Unauthorized { word_id: WordId, identity: String },

    #[error("no vote by {identity} on word {word_id}")]
    VoteNotFound { word_id: WordId, identity: String },

    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BoardError {
    /// True when the caller can fix the problem (bad input, rule rejection);
    /// false for storage and configuration failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, BoardError::Storage(_) | BoardError::Config(_))
    }
}

impl ErrorCode for BoardError {
    fn error_code(&self) -> &'static str {
        match self {
            BoardError::InvalidInput { .. } => error_code::INVALID_INPUT,
            BoardError::DuplicateText { .. } => error_code::DUPLICATE_TEXT,
            BoardError::CreatorLimitExceeded { .. } => error_code::CREATOR_LIMIT_EXCEEDED,
            BoardError::VoterLimitExceeded { .. } => error_code::VOTER_LIMIT_EXCEEDED,
            BoardError::AlreadyVoted { .. } => error_code::ALREADY_VOTED,
            BoardError::SelfVote { .. } => error_code::SELF_VOTE,
            BoardError::MaxWeightReached { .. } => error_code::MAX_WEIGHT_REACHED,
            BoardError::WordExpired { .. } => error_code::WORD_EXPIRED,
            BoardError::NotFound { .. } => error_code::NOT_FOUND,
            BoardError::Unauthorized { .. } => error_code::UNAUTHORIZED,
            BoardError::VoteNotFound { .. } => error_code::VOTE_NOT_FOUND,
            BoardError::Storage(e) => e.error_code(),
            BoardError::Config(e) => e.error_code(),
        }
    }
}
