//! Schema migrations using PRAGMA user_version.

pub mod v001_initial;
pub mod v002_descriptions;

use rusqlite::Connection;

use wordboard_core::errors::{BoardResult, StorageError};

use crate::to_storage_err;

/// Latest schema version this build knows how to produce.
pub const LATEST_VERSION: u32 = 2;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> BoardResult<()> {
    let current = current_version(conn)?;
    if current > LATEST_VERSION {
        return Err(StorageError::MigrationFailed {
            version: current,
            message: format!("database schema is newer than this build ({LATEST_VERSION})"),
        }
        .into());
    }

    let migrations: &[(u32, fn(&Connection) -> rusqlite::Result<()>)] = &[
        (1, v001_initial::migrate),
        (2, v002_descriptions::migrate),
    ];

    for (version, migrate) in migrations {
        if current < *version {
            migrate(conn).map_err(|e| StorageError::MigrationFailed {
                version: *version,
                message: e.to_string(),
            })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    message: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> BoardResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
