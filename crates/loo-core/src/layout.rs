//! Canonical (simulation, observation, column) layout
//!
//! Callers hand in 1, 2 or 3 axis arrays. Everything downstream works on the
//! 3-axis form, so lower ranks get singleton axes inserted here and the
//! original shape is kept only to shape the outputs on the way back out:
//!
//! | input rank | input axes            | canonical             |
//! |------------|-----------------------|-----------------------|
//! | 1          | `[obs]`               | `[1, obs, 1]`         |
//! | 2          | `[obs, col]`          | `[1, obs, col]`       |
//! | 3          | `[sim, obs, col]`     | unchanged             |
//!
//! Groups are numbered simulation-major: group `g` is simulation
//! `g / n_cols`, column `g % n_cols`.

use ndarray::{s, Array2, Array3, ArrayD, ArrayView3, ArrayViewD, Axis, Ix3};

use crate::group::SortedGroup;
use crate::{Error, Result};

/// Data and mask normalized to three axes
///
/// The two views are borrowed independently, so a long-lived data view can be
/// paired with a mask that only lives for one iteration.
#[derive(Debug, Clone)]
pub struct GroupedTensor<'d, 'm> {
    data: ArrayView3<'d, f64>,
    mask: ArrayView3<'m, bool>,
    input_shape: Vec<usize>,
}

impl<'d, 'm> GroupedTensor<'d, 'm> {
    /// Validate and canonicalize a data/mask pair
    ///
    /// Fails on rank outside 1..=3 or when the two shapes differ.
    pub fn new(data: ArrayViewD<'d, f64>, mask: ArrayViewD<'m, bool>) -> Result<Self> {
        let ndim = data.ndim();
        if !(1..=3).contains(&ndim) {
            return Err(Error::UnsupportedDimensionality { ndim });
        }
        if data.shape() != mask.shape() {
            return Err(Error::ShapeMismatch {
                data: data.shape().to_vec(),
                mask: mask.shape().to_vec(),
            });
        }

        let input_shape = data.shape().to_vec();
        Ok(Self {
            data: canonicalize(data)?,
            mask: canonicalize(mask)?,
            input_shape,
        })
    }

    pub fn n_sims(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn n_obs(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    pub fn n_cols(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    /// Number of (simulation, column) groups
    pub fn n_groups(&self) -> usize {
        self.n_sims() * self.n_cols()
    }

    /// Shape the caller passed in
    pub fn input_shape(&self) -> &[usize] {
        &self.input_shape
    }

    /// Canonical `(sims, obs, cols)` dimensions
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// (simulation, column) of a flat group index
    #[inline]
    pub fn group_key(&self, group: usize) -> (usize, usize) {
        (group / self.n_cols(), group % self.n_cols())
    }

    /// Count of `true` mask entries for every group, shape `[sim, col]`
    pub fn valid_counts(&self) -> Array2<usize> {
        self.mask
            .map(|&keep| usize::from(keep))
            .sum_axis(Axis(1))
    }

    /// Largest valid count over the whole batch
    pub fn max_group_size(&self) -> usize {
        self.valid_counts().iter().copied().max().unwrap_or(0)
    }

    /// Sorted valid values of one group
    pub fn sorted_group(&self, group: usize) -> SortedGroup {
        let (sim, col) = self.group_key(group);
        SortedGroup::from_lane(
            self.data.slice(s![sim, .., col]),
            self.mask.slice(s![sim, .., col]),
        )
    }

    /// Shape per-group results (in group order) with the observation axis removed
    ///
    /// A single simulation yields `[col]`, otherwise `[sim, col]`.
    pub fn collapse_output(&self, values: Vec<f64>) -> Result<ArrayD<f64>> {
        if values.len() != self.n_groups() {
            return Err(Error::size_mismatch(self.n_groups(), values.len(), "group output"));
        }
        let shape = if self.n_sims() == 1 {
            vec![self.n_cols()]
        } else {
            vec![self.n_sims(), self.n_cols()]
        };
        ArrayD::from_shape_vec(shape, values).map_err(|e| Error::InvalidInput(e.to_string()))
    }

    /// Reshape a canonical 3-axis result back to the caller's shape
    pub fn expand_output(&self, values: Array3<f64>) -> Result<ArrayD<f64>> {
        if values.dim() != self.data.dim() {
            return Err(Error::ShapeMismatch {
                data: self.data.shape().to_vec(),
                mask: values.shape().to_vec(),
            });
        }
        values
            .into_shape(self.input_shape.clone())
            .map_err(|e| Error::InvalidInput(e.to_string()))
    }
}

fn canonicalize<A>(view: ArrayViewD<'_, A>) -> Result<ArrayView3<'_, A>> {
    let view = match view.ndim() {
        1 => view.insert_axis(Axis(0)).insert_axis(Axis(2)),
        2 => view.insert_axis(Axis(0)),
        _ => view,
    };
    view.into_dimensionality::<Ix3>()
        .map_err(|e| Error::InvalidInput(e.to_string()))
}
