//! Error handling for wordboard.
//! One error enum per subsystem, `thiserror` only.

pub mod board_error;
pub mod config_error;
pub mod error_code;
pub mod storage_error;

pub use board_error::{BoardError, BoardResult};
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use storage_error::StorageError;
