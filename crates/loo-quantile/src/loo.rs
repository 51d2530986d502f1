//! Leave-one-out group quantiles
//!
//! For every valid observation this computes the quantile of its group with
//! that observation held out, at the cost of one sort per group.
//!
//! # Algorithm
//!
//! Sort a group of `n` valid values once: `x[0] <= ... <= x[n-1]`. With one
//! value removed the target rank is `r = q * (n - 2)`, giving the window
//! `l = floor(r)`, `u = ceil(r)`, `frac = r - l` over the remaining `n - 1`
//! values. Removing the value at sorted rank `k` shifts every later value down
//! by one rank, so the held-out result depends only on where `k` sits relative
//! to the window, not on the value itself:
//!
//! | held-out rank `k` | neighbours read          | ranks covered        |
//! |-------------------|--------------------------|----------------------|
//! | `k <= l`          | `x[l + 1]`, `x[u + 1]`   | `l + 1` ranks        |
//! | `k == l + 1`      | `x[l]`, `x[u + 1]`       | 1 rank               |
//! | `k >= l + 2`      | `x[l]`, `x[u]`           | `n - l - 2` ranks    |
//!
//! Each group therefore has at most three distinct results. They are computed
//! once per group, then written to every observation of the matching partition
//! through a ragged scatter ([`loo_core::ragged_arange`]) because partition
//! sizes differ from group to group.
//!
//! Groups with fewer than two valid values have nothing left after holding
//! one out and stay [`UNDEFINED`], as do masked-out positions.

use loo_core::{
    ragged_arange, ragged_owners, utils::count_nan, ExecutionStrategy, GroupedTensor,
    SortedGroup, UNDEFINED,
};
use ndarray::{Array3, ArrayD, ArrayViewD};
use tracing::{debug, instrument, trace};

use crate::config::{Interpolation, QuantileTarget};
use crate::estimator::GroupQuantile;
use crate::rank::RankWindow;
use crate::Result;

/// Number of rank partitions per group
const PARTITIONS: usize = 3;

/// Leave-one-out quantile for every valid position
///
/// The output has the same shape as `data`. Position `i` holds the
/// linear-interpolated q-quantile of its (simulation, column) group computed
/// over every other valid observation in that group. Masked-out positions and
/// groups with fewer than two valid values hold [`UNDEFINED`].
///
/// # Example
///
/// ```rust
/// use loo_quantile::loo_group_quantile;
/// use ndarray::array;
///
/// let data = array![10.0, 20.0, 30.0, 40.0, 50.0].into_dyn();
/// let mask = array![true, true, true, true, true].into_dyn();
///
/// let loo = loo_group_quantile(data.view(), mask.view(), 0.5).unwrap();
/// assert_eq!(loo[[0]], 35.0); // median of [20, 30, 40, 50]
/// assert_eq!(loo[[2]], 30.0); // median of [10, 20, 40, 50]
/// ```
pub fn loo_group_quantile(
    data: ArrayViewD<'_, f64>,
    mask: ArrayViewD<'_, bool>,
    quantile: impl Into<QuantileTarget>,
) -> Result<ArrayD<f64>> {
    GroupQuantile::new().loo_quantile(data, mask, quantile)
}

/// One sorted group with its held-out results per partition
#[derive(Debug)]
struct LooGroup {
    sorted: SortedGroup,
    /// Partition `p` covers sorted ranks `bounds[p]..bounds[p + 1]`
    bounds: [usize; PARTITIONS + 1],
    values: [f64; PARTITIONS],
}

impl LooGroup {
    fn new(sorted: SortedGroup, q: f64, max_n: usize) -> Self {
        let n = sorted.len();
        let window = RankWindow::leave_one_out(q, n, max_n);
        let (l, u) = (window.lower, window.upper);

        let values = [(l + 1, u + 1), (l, u + 1), (l, u)].map(|(lower, upper)| {
            window
                .interpolate_at(&sorted, lower, upper, Interpolation::Linear)
                .unwrap_or(UNDEFINED)
        });

        let below = (l + 1).min(n);
        let pivot = usize::from(l + 1 < n);
        let bounds = [0, below, below + pivot, n];

        trace!(n, ?window, ?bounds, "leave-one-out window");
        Self {
            sorted,
            bounds,
            values,
        }
    }

    #[inline]
    fn start(&self, partition: usize) -> usize {
        self.bounds[partition]
    }

    #[inline]
    fn len(&self, partition: usize) -> usize {
        self.bounds[partition + 1] - self.bounds[partition]
    }
}

#[instrument(level = "debug", skip_all, fields(shape = ?grouped.input_shape()))]
pub(crate) fn loo_quantiles(
    grouped: &GroupedTensor<'_, '_>,
    target: &QuantileTarget,
    strategy: ExecutionStrategy,
) -> Result<Array3<f64>> {
    let max_n = grouped.max_group_size();
    debug!(
        n_sims = grouped.n_sims(),
        n_obs = grouped.n_obs(),
        n_cols = grouped.n_cols(),
        max_n,
        parallel = strategy.is_parallel(),
        "leave-one-out group quantile"
    );

    let groups = strategy.execute_batch(grouped.n_groups(), |g| {
        let (_, col) = grouped.group_key(g);
        LooGroup::new(grouped.sorted_group(g), target.for_column(col), max_n)
    });

    let mut out = Array3::from_elem(grouped.dim(), UNDEFINED);
    for partition in 0..PARTITIONS {
        let starts: Vec<usize> = groups.iter().map(|g| g.start(partition)).collect();
        let lengths: Vec<usize> = groups.iter().map(|g| g.len(partition)).collect();
        let ranks = ragged_arange(&starts, &lengths)?;
        let owners = ragged_owners(&lengths);

        for (&rank, &owner) in ranks.iter().zip(&owners) {
            let group = &groups[owner];
            let (sim, col) = grouped.group_key(owner);
            if let Some(&row) = group.sorted.rows().get(rank) {
                out[[sim, row, col]] = group.values[partition];
            }
        }
    }

    debug!(
        undefined = count_nan(out.iter()),
        "leave-one-out group quantile done"
    );
    Ok(out)
}
