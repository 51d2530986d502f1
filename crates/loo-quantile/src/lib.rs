//! Masked group quantiles and leave-one-out quantiles
//!
//! This crate computes empirical quantiles (order statistics with linear
//! interpolation) over boolean-masked subsets of simulation batches, plus a
//! leave-one-out variant that, for every valid observation, reports the
//! quantile of its group without that observation.
//!
//! # Features
//!
//! - **Column Quantile**: one quantile per column of a fully valid table
//! - **Masked Group Quantile**: one quantile per (simulation, column) group
//!   over the rows selected by a mask, with linear, lower or upper
//!   interpolation
//! - **Leave-One-Out Group Quantile**: a value per valid position, from one
//!   sort per group rather than one per held-out observation
//! - **Shape Handling**: 1, 2 and 3 axis inputs via [`loo_core::GroupedTensor`]
//! - **Parallel Groups**: optional rayon execution with the `parallel` feature
//!
//! Groups without enough valid data produce [`UNDEFINED`] (NaN) rather than
//! an error; callers filter those downstream.
//!
//! # Example
//!
//! ```rust
//! use loo_quantile::{loo_group_quantile, masked_group_quantile, Interpolation};
//! use ndarray::array;
//!
//! let scores = array![0.9, 0.2, 0.75, 0.4, 0.6].into_dyn();
//! let positive = array![true, false, true, true, true].into_dyn();
//!
//! let threshold = masked_group_quantile(
//!     scores.view(),
//!     positive.view(),
//!     0.5,
//!     "linear".parse::<Interpolation>().unwrap(),
//! )
//! .unwrap();
//! assert_eq!(threshold.shape(), &[1]);
//!
//! let loo = loo_group_quantile(scores.view(), positive.view(), 0.5).unwrap();
//! assert_eq!(loo.shape(), scores.shape());
//! assert!(loo[[1]].is_nan());
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod estimator;
pub mod loo;
pub mod masked;
pub mod rank;

// Re-export main types
pub use column::column_quantile;
pub use config::{Interpolation, QuantileTarget};
pub use error::{Error, Result};
pub use estimator::GroupQuantile;
pub use loo::loo_group_quantile;
pub use masked::masked_group_quantile;
pub use rank::RankWindow;

// Re-export from loo-core
pub use loo_core::{ExecutionStrategy, UNDEFINED};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        column_quantile, loo_group_quantile, masked_group_quantile, Error, ExecutionStrategy,
        GroupQuantile, Interpolation, QuantileTarget, Result, UNDEFINED,
    };
}
