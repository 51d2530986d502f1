//! Core types for masked, grouped quantile computation
//!
//! This crate holds the pieces shared by every quantile routine in the
//! workspace:
//!
//! - **Layout**: [`GroupedTensor`] normalizes 1 to 3 axis data and masks to the
//!   canonical (simulation, observation, column) form and validates shapes.
//! - **Groups**: [`SortedGroup`] is the ascending list of a group's valid values
//!   together with the rows they came from. Validity is explicit, so no
//!   marker value has to sort anywhere in particular.
//! - **Ragged indexing**: [`ragged_arange`] flattens per-group rank ranges of
//!   differing length into one index list for scatter writes.
//! - **Execution**: [`ExecutionStrategy`] runs independent groups sequentially
//!   or on the rayon pool.
//!
//! # Example
//!
//! ```rust
//! use loo_core::GroupedTensor;
//! use ndarray::array;
//!
//! let data = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]].into_dyn();
//! let mask = array![[true, true], [false, true], [true, true]].into_dyn();
//!
//! let grouped = GroupedTensor::new(data.view(), mask.view()).unwrap();
//! assert_eq!(grouped.n_groups(), 2);
//! assert_eq!(grouped.sorted_group(0).values(), &[1.0, 5.0]);
//! ```

pub mod error;
pub mod execution;
pub mod group;
pub mod layout;
pub mod ragged;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use execution::ExecutionStrategy;
pub use group::SortedGroup;
pub use layout::GroupedTensor;
pub use ragged::{ragged_arange, ragged_owners};

/// Value written where a quantile is undefined for lack of data
pub const UNDEFINED: f64 = f64::NAN;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{ExecutionStrategy, GroupedTensor, Result, SortedGroup, UNDEFINED};
}
