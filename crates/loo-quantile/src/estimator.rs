//! Configured entry point for grouped quantiles

use loo_core::{ExecutionStrategy, GroupedTensor};
use ndarray::{Array1, ArrayD, ArrayView2, ArrayViewD};

use crate::config::{Interpolation, QuantileTarget};
use crate::{column, loo, masked, Result};

/// Grouped quantile estimator with a fixed interpolation and execution strategy
///
/// The free functions [`masked_group_quantile`](crate::masked_group_quantile)
/// and [`loo_group_quantile`](crate::loo_group_quantile) are shorthands for a
/// default-configured `GroupQuantile`.
///
/// # Example
///
/// ```rust
/// use loo_quantile::{ExecutionStrategy, GroupQuantile, Interpolation};
/// use ndarray::Array3;
///
/// let data = Array3::from_shape_fn((4, 50, 3), |(s, o, c)| (s + o * c) as f64);
/// let mask = Array3::from_shape_fn((4, 50, 3), |(_, o, _)| o % 3 != 0);
///
/// let estimator = GroupQuantile::new()
///     .with_interpolation(Interpolation::Lower)
///     .with_strategy(ExecutionStrategy::Parallel);
///
/// let q = estimator
///     .quantile(data.view().into_dyn(), mask.view().into_dyn(), 0.9)
///     .unwrap();
/// assert_eq!(q.shape(), &[4, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupQuantile {
    interpolation: Interpolation,
    strategy: ExecutionStrategy,
}

impl GroupQuantile {
    /// Linear interpolation, sequential execution
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Masked group quantile with the configured interpolation
    ///
    /// Validation happens before any group is touched: rank, shape, then the
    /// quantile targets.
    pub fn quantile(
        &self,
        data: ArrayViewD<'_, f64>,
        mask: ArrayViewD<'_, bool>,
        quantile: impl Into<QuantileTarget>,
    ) -> Result<ArrayD<f64>> {
        let grouped = GroupedTensor::new(data, mask)?;
        let target = quantile.into();
        target.validate(grouped.n_cols())?;

        let values = masked::group_quantiles(&grouped, &target, self.interpolation, self.strategy);
        Ok(grouped.collapse_output(values)?)
    }

    /// Leave-one-out quantile, same shape as `data`
    ///
    /// Always interpolates linearly; the configured interpolation only
    /// applies to [`quantile`](Self::quantile).
    pub fn loo_quantile(
        &self,
        data: ArrayViewD<'_, f64>,
        mask: ArrayViewD<'_, bool>,
        quantile: impl Into<QuantileTarget>,
    ) -> Result<ArrayD<f64>> {
        let grouped = GroupedTensor::new(data, mask)?;
        let target = quantile.into();
        target.validate(grouped.n_cols())?;

        let values = loo::loo_quantiles(&grouped, &target, self.strategy)?;
        Ok(grouped.expand_output(values)?)
    }

    /// Per-column quantile of a fully valid table
    pub fn column_quantile(
        &self,
        data: ArrayView2<'_, f64>,
        quantiles: &[f64],
    ) -> Result<Array1<f64>> {
        column::column_quantile(data, quantiles)
    }
}
