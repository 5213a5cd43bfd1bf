//! Error types for board-output.

use board_core::BoardingError;
use thiserror::Error;

/// Errors that can occur when writing or reading result files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file was read but does not follow the expected layout.
    #[error("malformed file: {0}")]
    Parse(String),

    /// The file header describes a cabin that cannot exist.
    #[error(transparent)]
    Boarding(#[from] BoardingError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
