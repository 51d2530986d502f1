//! Masked group quantiles and leave-one-out quantiles
//!
//! Facade over the workspace crates:
//!
//! - [`loo_core`]: canonical (simulation, observation, column) layout, sorted
//!   group views, ragged indexing and execution strategy
//! - [`loo_quantile`]: column, masked group and leave-one-out group quantiles
//!
//! # Example
//!
//! ```rust
//! use loo_stats::prelude::*;
//! use ndarray::Array3;
//!
//! // 10 simulations, 200 scored observations, 2 classes
//! let scores = Array3::from_shape_fn((10, 200, 2), |(s, o, c)| ((s * 31 + o * 17 + c) % 97) as f64);
//! let labels = Array3::from_shape_fn((10, 200, 2), |(_, o, c)| (o + c) % 2 == 0);
//!
//! let thresholds = masked_group_quantile(
//!     scores.view().into_dyn(),
//!     labels.view().into_dyn(),
//!     0.05,
//!     Interpolation::Linear,
//! )
//! .unwrap();
//! assert_eq!(thresholds.shape(), &[10, 2]);
//!
//! let loo = loo_group_quantile(scores.view().into_dyn(), labels.view().into_dyn(), 0.05).unwrap();
//! assert_eq!(loo.shape(), &[10, 200, 2]);
//! ```

pub use loo_core;
pub use loo_quantile;

pub use loo_core::{Error as CoreError, ExecutionStrategy, GroupedTensor, SortedGroup, UNDEFINED};
pub use loo_quantile::{
    column_quantile, loo_group_quantile, masked_group_quantile, Error, GroupQuantile,
    Interpolation, QuantileTarget, Result,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for convenient imports
pub mod prelude {
    pub use loo_quantile::prelude::*;
}
