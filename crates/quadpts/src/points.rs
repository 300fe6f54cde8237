//! Integration points and point sets.
//!
//! - `IntPoint`: coordinates in the reference domain plus a weight.
//! - `PointSet`: an ordered, immutable collection tagged by rule, dimension
//!   and point count. Order is part of the contract (index ↔ corner/edge
//!   correspondence) even though integration itself is order-independent.

use serde::Serialize;

use crate::cfg::MAX_DIM;
use crate::error::{QuadError, Result};

/// One quadrature point: `x` has length = dimension.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntPoint {
    x: Vec<f64>,
    w: f64,
}

impl IntPoint {
    #[inline]
    pub fn new(x: Vec<f64>, w: f64) -> Self {
        Self { x, w }
    }
    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }
    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }
    #[inline]
    pub fn ndim(&self) -> usize {
        self.x.len()
    }
}

/// Ordered set of quadrature points for one (rule, dimension, count).
///
/// Invariants (checked by `new`):
/// - `1 <= ndim <= 3`, `npts >= 1`;
/// - `points.len() == npts`;
/// - every point has exactly `ndim` coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointSet {
    rule: String,
    ndim: usize,
    npts: usize,
    points: Vec<IntPoint>,
}

impl PointSet {
    pub fn new(
        rule: impl Into<String>,
        ndim: usize,
        npts: usize,
        points: Vec<IntPoint>,
    ) -> Result<Self> {
        let rule = rule.into();
        let invalid = |reason: String| QuadError::InvalidConfiguration {
            rule: rule.clone(),
            dimension: ndim,
            count: npts,
            reason,
        };
        if ndim == 0 || ndim > MAX_DIM {
            return Err(invalid(format!("dimension must be in 1..={MAX_DIM}")));
        }
        if npts == 0 {
            return Err(invalid("point count must be at least 1".into()));
        }
        if points.len() != npts {
            return Err(invalid(format!("{} points were produced", points.len())));
        }
        if let Some(k) = points.iter().position(|p| p.ndim() != ndim) {
            return Err(invalid(format!(
                "point {k} has {} coordinates",
                points[k].ndim()
            )));
        }
        Ok(Self {
            rule,
            ndim,
            npts,
            points,
        })
    }

    #[inline]
    pub fn rule(&self) -> &str {
        &self.rule
    }
    #[inline]
    pub fn ndim(&self) -> usize {
        self.ndim
    }
    #[inline]
    pub fn npts(&self) -> usize {
        self.npts
    }
    #[inline]
    pub fn points(&self) -> &[IntPoint] {
        &self.points
    }
    pub fn iter(&self) -> std::slice::Iter<'_, IntPoint> {
        self.points.iter()
    }

    /// Sum of all weights (measure of the reference domain for a consistent rule).
    pub fn weight_sum(&self) -> f64 {
        self.points.iter().map(|p| p.w).sum()
    }

    /// Weighted sum `Σ w_k f(x_k)`.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(&[f64]) -> f64,
    {
        self.points.iter().map(|p| p.w * f(&p.x)).sum()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a IntPoint;
    type IntoIter = std::slice::Iter<'a, IntPoint>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
