//! # wordboard-storage
//!
//! SQLite persistence for the word/vote ledger.
//! Single serialized write connection, round-robin read pool, `user_version`
//! migrations, and the `IWordStore` implementation that applies weight
//! engine decisions inside `BEGIN IMMEDIATE` transactions.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use wordboard_core::errors::{BoardError, StorageError};

/// Wrap a SQLite failure message into the domain error.
pub fn to_storage_err(message: String) -> BoardError {
    BoardError::Storage(StorageError::SqliteError { message })
}
