//! Quantile of each (simulation, column) group over a masked subset of rows

use loo_core::{utils::count_nan, ExecutionStrategy, GroupedTensor, UNDEFINED};
use ndarray::{ArrayD, ArrayViewD};
use tracing::{debug, instrument, trace};

use crate::config::{Interpolation, QuantileTarget};
use crate::estimator::GroupQuantile;
use crate::rank::RankWindow;
use crate::Result;

/// Quantile of every group over the rows where `mask` is `true`
///
/// `data` and `mask` share a shape with 1 to 3 axes (see
/// [`GroupedTensor`]). The observation axis is collapsed: the result has one
/// value per (simulation, column), shaped `[col]` for a single simulation and
/// `[sim, col]` otherwise. Groups without enough valid rows come back as
/// [`UNDEFINED`].
///
/// # Example
///
/// ```rust
/// use loo_quantile::{masked_group_quantile, Interpolation};
/// use ndarray::array;
///
/// let data = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]].into_dyn();
/// let mask = array![[true, false], [true, true], [false, true], [true, true]].into_dyn();
///
/// let q = masked_group_quantile(data.view(), mask.view(), 0.5, Interpolation::Linear).unwrap();
/// assert_eq!(q.as_slice().unwrap(), &[2.0, 30.0]);
/// ```
pub fn masked_group_quantile(
    data: ArrayViewD<'_, f64>,
    mask: ArrayViewD<'_, bool>,
    quantile: impl Into<QuantileTarget>,
    interpolation: Interpolation,
) -> Result<ArrayD<f64>> {
    GroupQuantile::new()
        .with_interpolation(interpolation)
        .quantile(data, mask, quantile)
}

#[instrument(level = "debug", skip_all, fields(shape = ?grouped.input_shape(), interpolation = %interpolation))]
pub(crate) fn group_quantiles(
    grouped: &GroupedTensor<'_, '_>,
    target: &QuantileTarget,
    interpolation: Interpolation,
    strategy: ExecutionStrategy,
) -> Vec<f64> {
    let max_n = grouped.max_group_size();
    debug!(
        n_sims = grouped.n_sims(),
        n_obs = grouped.n_obs(),
        n_cols = grouped.n_cols(),
        max_n,
        parallel = strategy.is_parallel(),
        "masked group quantile"
    );

    let values = strategy.execute_batch(grouped.n_groups(), |g| {
        let group = grouped.sorted_group(g);
        if group.is_empty() {
            return UNDEFINED;
        }
        let (_, col) = grouped.group_key(g);
        let window = RankWindow::full(target.for_column(col), group.len(), max_n);
        trace!(group = g, n = group.len(), ?window, "rank window");
        window
            .interpolate(&group, interpolation)
            .unwrap_or(UNDEFINED)
    });

    debug!(undefined = count_nan(&values), "masked group quantile done");
    values
}
