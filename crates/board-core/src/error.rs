//! Core error type.
//!
//! `board-sim` and `board-output` wrap `BoardingError` as one variant of their
//! own enums, so configuration problems surface unchanged at every layer.

use thiserror::Error;

/// Errors raised while validating a configuration or parsing user input.
///
/// All of these are detected before any cabin grid is allocated.
#[derive(Debug, Error)]
pub enum BoardingError {
    #[error("{requested} passengers exceed the cabin capacity of {capacity} seats")]
    TooManyPassengers { requested: usize, capacity: usize },

    #[error("unknown boarding policy {0:?}")]
    UnknownPolicy(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `board-*` crates.
pub type BoardingResult<T> = Result<T, BoardingError>;
