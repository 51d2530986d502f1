//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot compute quantile of empty data")]
    EmptyData,

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Unrecognized interpolation mode
    #[error("Unknown interpolation '{0}', expected one of: linear, lower, upper")]
    InvalidInterpolation(String),

    /// Per-column quantiles do not line up with the column axis
    #[error("Expected {expected} quantiles (one per column), got {actual}")]
    QuantileCountMismatch { expected: usize, actual: usize },

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] loo_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }
}
