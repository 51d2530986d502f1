//! Ragged index construction
//!
//! Groups in a batch hold different numbers of valid observations, so writes
//! that cover "the first k ranks of every group" cannot be expressed as one
//! rectangular slice. These helpers flatten such per-group ranges into a
//! single index list plus the owning group of every entry.

use crate::{Error, Result};

/// Concatenate the ranges `[starts[i], starts[i] + lengths[i])` in group order
///
/// Zero-length groups contribute nothing.
///
/// # Examples
///
/// ```rust
/// use loo_core::ragged::ragged_arange;
///
/// let idx = ragged_arange(&[0, 10, 5], &[2, 0, 3]).unwrap();
/// assert_eq!(idx, vec![0, 1, 5, 6, 7]);
/// ```
pub fn ragged_arange(starts: &[usize], lengths: &[usize]) -> Result<Vec<usize>> {
    if starts.len() != lengths.len() {
        return Err(Error::size_mismatch(starts.len(), lengths.len(), "ragged lengths"));
    }

    let total: usize = lengths.iter().sum();
    let mut out = Vec::with_capacity(total);
    for (&start, &len) in starts.iter().zip(lengths) {
        out.extend(start..start + len);
    }
    Ok(out)
}

/// Group index of every entry produced by [`ragged_arange`] for the same `lengths`
///
/// ```rust
/// use loo_core::ragged::ragged_owners;
///
/// assert_eq!(ragged_owners(&[2, 0, 3]), vec![0, 0, 2, 2, 2]);
/// ```
pub fn ragged_owners(lengths: &[usize]) -> Vec<usize> {
    let total: usize = lengths.iter().sum();
    let mut out = Vec::with_capacity(total);
    for (group, &len) in lengths.iter().enumerate() {
        out.extend(std::iter::repeat(group).take(len));
    }
    out
}
