//! Naive reference implementations of the grouped quantiles
//!
//! These implementations are intentionally simple and unoptimized.
//! They serve as a reference for verifying the correctness of optimized implementations.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

use ndarray::{Array2, Array3, ArrayView3};

/// Naive quantile over explicit slices
///
/// This implementation:
/// - Copies and sorts every group from scratch
/// - Recomputes the whole group for every held-out observation
/// - Has no shared rank arithmetic with the optimized code
pub struct NaiveQuantile;

impl NaiveQuantile {
    /// Quantile of `values` at probability `p`
    ///
    /// `mode` is one of "linear", "lower", "upper". Empty input gives NaN.
    pub fn quantile(values: &[f64], p: f64, mode: &str) -> f64 {
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");
        if values.is_empty() {
            return f64::NAN;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let rank = p * (sorted.len() - 1) as f64;
        let lo = sorted[rank.floor() as usize];
        let hi = sorted[rank.ceil() as usize];
        match mode {
            "lower" => lo,
            "upper" => hi,
            _ => lo + (hi - lo) * (rank - rank.floor()),
        }
    }

    /// Masked quantile of every (simulation, column) group, shape `[sim, col]`
    pub fn masked(data: ArrayView3<f64>, mask: ArrayView3<bool>, p: f64, mode: &str) -> Array2<f64> {
        let (n_sims, n_obs, n_cols) = data.dim();
        Array2::from_shape_fn((n_sims, n_cols), |(s, c)| {
            let values: Vec<f64> = (0..n_obs)
                .filter(|&o| mask[[s, o, c]])
                .map(|o| data[[s, o, c]])
                .collect();
            Self::quantile(&values, p, mode)
        })
    }

    /// Leave-one-out quantile by dropping each valid observation in turn
    pub fn loo(data: ArrayView3<f64>, mask: ArrayView3<bool>, p: f64) -> Array3<f64> {
        let (n_sims, n_obs, n_cols) = data.dim();
        Array3::from_shape_fn((n_sims, n_obs, n_cols), |(s, o, c)| {
            if !mask[[s, o, c]] {
                return f64::NAN;
            }
            let others: Vec<f64> = (0..n_obs)
                .filter(|&other| other != o && mask[[s, other, c]])
                .map(|other| data[[s, other, c]])
                .collect();
            Self::quantile(&others, p, "linear")
        })
    }
}
