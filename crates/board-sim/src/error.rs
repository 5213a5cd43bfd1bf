use board_core::BoardingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] BoardingError),

    #[error("boarding did not finish within {budget} ticks ({seated} of {total} passengers seated)")]
    TickBudgetExceeded {
        budget: u64,
        seated: usize,
        total:  usize,
    },

    #[error("invalid manifest: {0}")]
    Manifest(String),
}

pub type SimResult<T> = Result<T, SimError>;

