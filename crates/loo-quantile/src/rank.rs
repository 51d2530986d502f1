//! Fractional rank arithmetic shared by the grouped quantiles
//!
//! For a group of `n` valid values the target rank is `q * (n - 1)`; with one
//! observation held out it is `q * (n - 2)`. Floor and ceiling are clipped to
//! `[0, max_n]` where `max_n` is the largest group in the batch, and the
//! fraction is taken against the clipped floor. Ranks that land at or past a
//! group's own `n` read no value, which turns into an undefined result.

use loo_core::SortedGroup;

use crate::config::Interpolation;

/// Floor/ceiling ranks around a fractional rank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankWindow {
    pub lower: usize,
    pub upper: usize,
    pub frac: f64,
}

impl RankWindow {
    /// Window for the q-quantile of all `n` values
    pub fn full(q: f64, n: usize, max_n: usize) -> Self {
        Self::from_rank(q * (n as f64 - 1.0), max_n)
    }

    /// Window for the q-quantile of `n - 1` values (one held out)
    pub fn leave_one_out(q: f64, n: usize, max_n: usize) -> Self {
        Self::from_rank(q * (n as f64 - 2.0), max_n)
    }

    fn from_rank(rank: f64, max_n: usize) -> Self {
        let max_n = max_n as f64;
        let lower = rank.floor().clamp(0.0, max_n) as usize;
        let upper = rank.ceil().clamp(0.0, max_n) as usize;
        Self {
            lower,
            upper,
            frac: rank - lower as f64,
        }
    }

    /// Quantile read at this window's own ranks
    #[inline]
    pub fn interpolate(&self, group: &SortedGroup, interpolation: Interpolation) -> Option<f64> {
        self.interpolate_at(group, self.lower, self.upper, interpolation)
    }

    /// Quantile read at arbitrary ranks, using this window's fraction
    #[inline]
    pub fn interpolate_at(
        &self,
        group: &SortedGroup,
        lower: usize,
        upper: usize,
        interpolation: Interpolation,
    ) -> Option<f64> {
        interpolation.apply(group.value(lower), group.value(upper), self.frac)
    }
}
