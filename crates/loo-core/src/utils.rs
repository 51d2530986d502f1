//! Utility functions for working with result buffers

/// Number of NaN entries
///
/// Undefined quantiles are reported as NaN, so this doubles as a count of
/// groups or positions without enough data.
///
/// # Examples
///
/// ```rust
/// use loo_core::utils::count_nan;
///
/// assert_eq!(count_nan([1.0, f64::NAN, 3.0].iter()), 1);
/// ```
pub fn count_nan<'a>(values: impl IntoIterator<Item = &'a f64>) -> usize {
    values.into_iter().filter(|v| v.is_nan()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_nan() {
        assert_eq!(count_nan([].iter()), 0);
        assert_eq!(count_nan([f64::NAN, f64::NAN, 0.0].iter()), 2);
        assert_eq!(count_nan(vec![f64::INFINITY, -0.0].iter()), 0);
    }
}
