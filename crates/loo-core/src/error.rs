//! Error types for masked quantile computation
//!
//! Provides the shared error type for the loo-stats crates. Only malformed
//! requests are errors; groups with too little data surface as undefined
//! values in the output instead.

use thiserror::Error;

/// Core error type for grouped tensor operations
#[derive(Error, Debug)]
pub enum Error {
    /// Data and mask disagree in shape
    #[error("Shape mismatch: data has shape {data:?}, mask has shape {mask:?}")]
    ShapeMismatch { data: Vec<usize>, mask: Vec<usize> },

    /// Input rank outside 1..=3
    #[error("Unsupported dimensionality: expected 1 to 3 axes, got {ndim}")]
    UnsupportedDimensionality { ndim: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}
