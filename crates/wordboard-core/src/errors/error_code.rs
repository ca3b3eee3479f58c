//! Stable error codes for callers at the service boundary.

/// Maps an error to a stable code string so an outer layer (HTTP, CLI)
/// can tell causes apart without matching on message text.
pub trait ErrorCode {
    /// Returns the code string (e.g., "DUPLICATE_TEXT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const DUPLICATE_TEXT: &str = "DUPLICATE_TEXT";
pub const CREATOR_LIMIT_EXCEEDED: &str = "CREATOR_LIMIT_EXCEEDED";
pub const VOTER_LIMIT_EXCEEDED: &str = "VOTER_LIMIT_EXCEEDED";
pub const ALREADY_VOTED: &str = "ALREADY_VOTED";
pub const SELF_VOTE: &str = "SELF_VOTE";
pub const MAX_WEIGHT_REACHED: &str = "MAX_WEIGHT_REACHED";
pub const WORD_EXPIRED: &str = "WORD_EXPIRED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const VOTE_NOT_FOUND: &str = "VOTE_NOT_FOUND";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const DB_CORRUPT: &str = "DB_CORRUPT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
