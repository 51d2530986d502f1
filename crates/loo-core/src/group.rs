//! Validity-aware sorted view of a single group
//!
//! A group is one (simulation, column) lane along the observation axis. Only
//! observations whose mask entry is `true` enter the view, so the number of
//! valid values is the view length and never has to be recovered from where
//! a marker value landed after sorting.

use ndarray::ArrayView1;
use ordered_float::OrderedFloat;

/// Valid values of one group in ascending order, with their source rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedGroup {
    values: Vec<f64>,
    rows: Vec<usize>,
}

impl SortedGroup {
    /// Build from a data lane and its mask lane
    ///
    /// Values are ordered by `OrderedFloat` (NaN after every number); equal
    /// values keep ascending row order so the view is deterministic.
    pub fn from_lane(values: ArrayView1<'_, f64>, mask: ArrayView1<'_, bool>) -> Self {
        debug_assert_eq!(values.len(), mask.len());

        let mut entries: Vec<(OrderedFloat<f64>, usize)> = values
            .iter()
            .zip(mask.iter())
            .enumerate()
            .filter(|(_, (_, keep))| **keep)
            .map(|(row, (&v, _))| (OrderedFloat(v), row))
            .collect();
        entries.sort_unstable();

        let (values, rows) = entries.into_iter().map(|(v, row)| (v.0, row)).unzip();
        Self { values, rows }
    }

    /// Build from a slice where every entry is valid
    pub fn from_values(values: &[f64]) -> Self {
        let mask = vec![true; values.len()];
        Self::from_lane(ArrayView1::from(values), ArrayView1::from(&mask[..]))
    }

    /// Number of valid observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Order statistic at `rank`, `None` past the last valid value
    #[inline]
    pub fn value(&self, rank: usize) -> Option<f64> {
        self.values.get(rank).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Observation row of each order statistic, in rank order
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }
}
