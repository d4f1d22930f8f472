// File: crates/simplify-core/src/error.rs
// Summary: Error taxonomy for the simplifier and composer (caller contract violations only).

use thiserror::Error;

/// Coarse classification of a [`SimplifyError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
}

/// Why an input was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvalidInput {
    #[error("tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),
    #[error("tolerance must be finite, got {0}")]
    NonFiniteTolerance(f64),
    #[error("non-finite coordinate at index {index}: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
    #[error("series name must not be empty")]
    EmptySeriesName,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SimplifyError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl SimplifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimplifyError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}
