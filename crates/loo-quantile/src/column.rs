//! Per-column quantile of a fully valid table

use loo_core::SortedGroup;
use ndarray::{Array1, ArrayView2, Axis};
use tracing::{debug, instrument};

use crate::config::Interpolation;
use crate::rank::RankWindow;
use crate::{Error, Result};

/// Linear-interpolated quantile of every column
///
/// Rows are observations, columns are groups, and `quantiles` holds one
/// fraction per column. Every row is treated as valid.
///
/// # Example
///
/// ```rust
/// use loo_quantile::column_quantile;
/// use ndarray::array;
///
/// let data = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]];
/// let q = column_quantile(data.view(), &[0.5, 0.5]).unwrap();
/// assert_eq!(q.to_vec(), vec![4.0, 5.0]);
/// ```
#[instrument(level = "debug", skip_all, fields(shape = ?data.shape()))]
pub fn column_quantile(data: ArrayView2<'_, f64>, quantiles: &[f64]) -> Result<Array1<f64>> {
    let (n_rows, n_cols) = data.dim();
    if quantiles.len() != n_cols {
        return Err(Error::QuantileCountMismatch {
            expected: n_cols,
            actual: quantiles.len(),
        });
    }
    quantiles
        .iter()
        .try_for_each(|&p| Error::check_probability(p))?;
    if n_rows == 0 {
        return Err(Error::EmptyData);
    }

    debug!(n_rows, n_cols, "column quantile");

    let values = data
        .axis_iter(Axis(1))
        .zip(quantiles)
        .map(|(column, &q)| {
            let column: Vec<f64> = column.iter().copied().collect();
            let group = SortedGroup::from_values(&column);
            RankWindow::full(q, n_rows, n_rows)
                .interpolate(&group, Interpolation::Linear)
                .unwrap_or(loo_core::UNDEFINED)
        })
        .collect();

    Ok(Array1::from_vec(values))
}
