//! Single write connection behind a `Mutex`. Serialized writes, no contention.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, Transaction, TransactionBehavior};

use wordboard_core::errors::{BoardError, BoardResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// The one connection every state change goes through.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> BoardResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory(busy_timeout_ms: u32) -> BoardResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and run `f` outside any transaction.
    pub fn with_conn<F, T>(&self, f: F) -> BoardResult<T>
    where
        F: FnOnce(&Connection) -> BoardResult<T>,
    {
        let guard = self.lock()?;
        f(&guard)
    }

    /// Acquire the write lock and run `f` inside `BEGIN IMMEDIATE`.
    ///
    /// The database write lock is taken before `f` reads anything, so every
    /// count-then-write inside `f` is serializable, also against other
    /// processes sharing the file. Any error rolls the whole unit back.
    pub fn with_immediate_transaction<F, T>(&self, f: F) -> BoardResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> BoardResult<T>,
    {
        let guard = self.lock()?;
        let tx = Transaction::new_unchecked(&guard, TransactionBehavior::Immediate)
            .map_err(|e| to_storage_err(format!("failed to begin immediate transaction: {e}")))?;

        match f(&tx) {
            Ok(value) => {
                tx.commit()
                    .map_err(|e| to_storage_err(format!("failed to commit: {e}")))?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    tracing::error!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }

    fn lock(&self) -> BoardResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            BoardError::Storage(StorageError::LockPoisoned {
                connection: "writer".to_string(),
            })
        })
    }
}
