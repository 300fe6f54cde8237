//! Wilson's symmetric 5- and 8-point rules on the square `[-1,1]²`.
//!
//! 5-point layout: four points `(±a, ±a)` with weight `wa` around a centroid
//! of weight `w0`. Exact for total degree 3 whenever `4 wa + w0 = 4` and
//! `3 wa a² = 1`.
//!
//! 8-point layout: diagonal points `(±a, ±a)` with weight `wa` and axis
//! points `(0, ±b)`, `(±b, 0)` with weight `wb`.

use crate::error::{QuadError, Result};
use crate::points::{IntPoint, PointSet};

use super::RuleKind;

fn check_shape(rule: RuleKind, ndim: usize, npts: usize, want: usize) -> Result<()> {
    if ndim != 2 || npts != want {
        return Err(QuadError::InvalidConfiguration {
            rule: rule.name().to_string(),
            dimension: ndim,
            count: npts,
            reason: format!("works only with ndim=2 and npts={want}"),
        });
    }
    Ok(())
}

fn missing(rule: RuleKind, param: &'static str) -> QuadError {
    QuadError::MissingParameter {
        rule: rule.name().to_string(),
        param,
    }
}

fn out_of_range(rule: RuleKind, param: &'static str, value: f64) -> QuadError {
    QuadError::InvalidParameter {
        rule: rule.name().to_string(),
        param,
        value,
    }
}

/// Centroid weight `w0`, corner weight `wa`, corner offset `a`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FivePoint {
    w0: f64,
    wa: f64,
    a: f64,
}

impl FivePoint {
    pub(crate) fn corner() -> Self {
        Self {
            w0: 8.0 / 3.0,
            wa: 1.0 / 3.0,
            a: 1.0,
        }
    }

    pub(crate) fn stable() -> Self {
        Self {
            w0: 0.004,
            wa: 0.999,
            a: 0.5776391,
        }
    }

    /// `W5`: needs a finite `w0 < 4` so that `wa > 0`.
    pub(crate) fn from_w0(w0: Option<f64>) -> Result<Self> {
        let rule = RuleKind::W5;
        let w0 = w0.ok_or_else(|| missing(rule, "w0"))?;
        if !w0.is_finite() || w0 >= 4.0 {
            return Err(out_of_range(rule, "w0", w0));
        }
        let wa = (4.0 - w0) / 4.0;
        Ok(Self {
            w0,
            wa,
            a: (1.0 / (3.0 * wa)).sqrt(),
        })
    }
}

/// Diagonal weight `wa` at `(±a, ±a)`, axis weight `wb` at distance `b`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EightPoint {
    wa: f64,
    wb: f64,
    a: f64,
    b: f64,
}

impl EightPoint {
    pub(crate) fn fixed() -> Self {
        Self {
            wa: 9.0 / 49.0,
            wb: 40.0 / 49.0,
            a: (7.0 / 9.0_f64).sqrt(),
            b: (7.0 / 15.0_f64).sqrt(),
        }
    }

    /// `W8`: needs a finite `0 < wb < 1`.
    pub(crate) fn from_wb(wb: Option<f64>) -> Result<Self> {
        let rule = RuleKind::W8;
        let wb = wb.ok_or_else(|| missing(rule, "wb"))?;
        if !wb.is_finite() || wb <= 0.0 || wb >= 1.0 {
            return Err(out_of_range(rule, "wb", wb));
        }
        let wa = 1.0 - wb;
        let swa = wa.sqrt();
        Ok(Self {
            wa,
            wb,
            a: 1.0 / (3.0 * swa).sqrt(),
            b: ((2.0 - 2.0 * swa) / (3.0 * wb)).sqrt(),
        })
    }
}

/// Shape is checked before `coeffs` runs, so parameter errors only surface
/// for a valid shape.
pub(crate) fn five_point<F>(
    rule: RuleKind,
    ndim: usize,
    npts: usize,
    coeffs: F,
) -> Result<PointSet>
where
    F: FnOnce() -> Result<FivePoint>,
{
    check_shape(rule, ndim, npts, 5)?;
    let FivePoint { w0, wa, a } = coeffs()?;
    let points = vec![
        IntPoint::new(vec![-a, -a], wa),
        IntPoint::new(vec![a, -a], wa),
        IntPoint::new(vec![0.0, 0.0], w0),
        IntPoint::new(vec![-a, a], wa),
        IntPoint::new(vec![a, a], wa),
    ];
    PointSet::new(rule.name(), ndim, npts, points)
}

pub(crate) fn eight_point<F>(
    rule: RuleKind,
    ndim: usize,
    npts: usize,
    coeffs: F,
) -> Result<PointSet>
where
    F: FnOnce() -> Result<EightPoint>,
{
    check_shape(rule, ndim, npts, 8)?;
    let EightPoint { wa, wb, a, b } = coeffs()?;
    let points = vec![
        IntPoint::new(vec![-a, -a], wa),
        IntPoint::new(vec![0.0, -b], wb),
        IntPoint::new(vec![a, -a], wa),
        IntPoint::new(vec![-b, 0.0], wb),
        IntPoint::new(vec![b, 0.0], wb),
        IntPoint::new(vec![-a, a], wa),
        IntPoint::new(vec![0.0, b], wb),
        IntPoint::new(vec![a, a], wa),
    ];
    PointSet::new(rule.name(), ndim, npts, points)
}
