//! Configuration types for grouped quantiles

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// How the two order statistics around a fractional rank are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Blend the neighbours by the fractional part of the rank
    #[default]
    Linear,
    /// Order statistic at the floor of the rank
    Lower,
    /// Order statistic at the ceiling of the rank
    Upper,
}

impl Interpolation {
    /// Name accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }

    /// Combine the order statistics at the floor and ceiling ranks
    ///
    /// A missing order statistic that the mode needs makes the result missing.
    #[inline]
    pub fn apply(&self, lower: Option<f64>, upper: Option<f64>, frac: f64) -> Option<f64> {
        match self {
            Self::Lower => lower,
            Self::Upper => upper,
            Self::Linear => match (lower, upper) {
                (Some(lo), Some(hi)) => Some(lo + (hi - lo) * frac),
                _ => None,
            },
        }
    }
}

impl FromStr for Interpolation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(Self::Linear),
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            _ => Err(Error::InvalidInterpolation(s.to_string())),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quantile fraction(s) to evaluate
#[derive(Debug, Clone, PartialEq)]
pub enum QuantileTarget {
    /// Same fraction for every group
    Scalar(f64),
    /// One fraction per column
    PerColumn(Vec<f64>),
}

impl QuantileTarget {
    /// Check every fraction lies in [0, 1] and per-column targets match `n_cols`
    pub fn validate(&self, n_cols: usize) -> Result<()> {
        match self {
            Self::Scalar(p) => Error::check_probability(*p),
            Self::PerColumn(ps) => {
                if ps.len() != n_cols {
                    return Err(Error::QuantileCountMismatch {
                        expected: n_cols,
                        actual: ps.len(),
                    });
                }
                ps.iter().try_for_each(|&p| Error::check_probability(p))
            }
        }
    }

    /// Fraction used for `col`
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded.
    #[inline]
    pub fn for_column(&self, col: usize) -> f64 {
        match self {
            Self::Scalar(p) => *p,
            Self::PerColumn(ps) => ps[col],
        }
    }
}

impl From<f64> for QuantileTarget {
    fn from(p: f64) -> Self {
        Self::Scalar(p)
    }
}

impl From<Vec<f64>> for QuantileTarget {
    fn from(ps: Vec<f64>) -> Self {
        Self::PerColumn(ps)
    }
}

impl From<&[f64]> for QuantileTarget {
    fn from(ps: &[f64]) -> Self {
        Self::PerColumn(ps.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for QuantileTarget {
    fn from(ps: [f64; N]) -> Self {
        Self::PerColumn(ps.to_vec())
    }
}
