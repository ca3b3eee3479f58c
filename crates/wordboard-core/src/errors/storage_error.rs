use super::error_code::{self, ErrorCode};

/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("database corruption detected: {details}")]
    CorruptionDetected { details: String },

    #[error("connection lock poisoned: {connection}")]
    LockPoisoned { connection: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            StorageError::CorruptionDetected { .. } => error_code::DB_CORRUPT,
            StorageError::SqliteError { .. } | StorageError::LockPoisoned { .. } => {
                error_code::STORAGE_ERROR
            }
        }
    }
}
