use wordboard_core::errors::{BoardError, ErrorCode};

pub type CliResult<T> = Result<T, CliError>;

pub const IO_ERROR: &str = "IO_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// 1 for rule rejections and bad input, 2 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Board(e) if e.is_client_error() => 1,
            _ => 2,
        }
    }
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            CliError::Board(e) => e.error_code(),
            CliError::Io(_) => IO_ERROR,
            CliError::Json(_) => SERIALIZATION_ERROR,
        }
    }
}
