//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use wordboard_core::config::StorageConfig;
use wordboard_core::errors::BoardResult;

use crate::migrations;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The single write connection plus the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer, bring the schema up to date, then open
    /// `config.read_pool_size` readers on the same file.
    pub fn open(path: &Path, config: &StorageConfig) -> BoardResult<Self> {
        let writer = WriteConnection::open(path, config.busy_timeout_ms)?;
        writer.with_conn(migrations::run_migrations)?;
        let readers = ReadPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// In-memory database. There is no read pool: a second in-memory
    /// connection would be a separate, empty database.
    pub fn open_in_memory(config: &StorageConfig) -> BoardResult<Self> {
        let writer = WriteConnection::open_in_memory(config.busy_timeout_ms)?;
        writer.with_conn(migrations::run_migrations)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }
}
