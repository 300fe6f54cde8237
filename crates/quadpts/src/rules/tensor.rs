//! Tensor-product Gauss-Legendre rules on `[-1,1]^dim`.
//!
//! Index layout: `m = i + n1d*j + n1d²*k` (x fastest), coordinates
//! `(x[i], x[j], x[k])`, weight `w[i] w[j] w[k]`.

use crate::cfg::{MAX_DIM, MAX_N1D};
use crate::error::{QuadError, Result};
use crate::gauss::NodesWeights;
use crate::points::{IntPoint, PointSet};

use super::RuleKind;

/// `n1d` with `n1d^ndim == npts` and `n1d <= MAX_N1D`, if it exists.
pub(crate) fn points_per_axis(ndim: usize, npts: usize) -> Option<usize> {
    exact_root(ndim, npts).filter(|&n1d| n1d <= MAX_N1D)
}

fn exact_root(ndim: usize, npts: usize) -> Option<usize> {
    if ndim == 0 || ndim > MAX_DIM || npts == 0 {
        return None;
    }
    let n1d = (npts as f64).powf(1.0 / ndim as f64).round() as usize;
    (n1d.checked_pow(ndim as u32) == Some(npts)).then_some(n1d)
}

pub(crate) fn gauss_legendre<P>(provider: &P, ndim: usize, npts: usize) -> Result<PointSet>
where
    P: NodesWeights + ?Sized,
{
    let rule = RuleKind::Le;
    let Some(n1d) = points_per_axis(ndim, npts) else {
        let reason = if ndim == 0 || ndim > MAX_DIM {
            format!("dimension must be in 1..={MAX_DIM}")
        } else if let Some(n1d) = exact_root(ndim, npts) {
            format!("{n1d} points per axis exceeds the limit of {MAX_N1D}")
        } else {
            format!("{npts} is not a perfect power of degree {ndim}")
        };
        return Err(QuadError::InvalidConfiguration {
            rule: rule.name().to_string(),
            dimension: ndim,
            count: npts,
            reason,
        });
    };
    let (x, w) = provider.nodes_weights(-1.0, 1.0, n1d);
    if x.len() != n1d || w.len() != n1d {
        return Err(QuadError::InvalidConfiguration {
            rule: rule.name().to_string(),
            dimension: ndim,
            count: npts,
            reason: format!("1-D provider returned {} nodes, expected {n1d}", x.len()),
        });
    }
    let mut points = Vec::with_capacity(npts);
    match ndim {
        1 => {
            for (&xi, &wi) in x.iter().zip(&w) {
                points.push(IntPoint::new(vec![xi], wi));
            }
        }
        2 => {
            for j in 0..n1d {
                for i in 0..n1d {
                    points.push(IntPoint::new(vec![x[i], x[j]], w[i] * w[j]));
                }
            }
        }
        _ => {
            for k in 0..n1d {
                for j in 0..n1d {
                    for i in 0..n1d {
                        points.push(IntPoint::new(
                            vec![x[i], x[j], x[k]],
                            w[i] * w[j] * w[k],
                        ));
                    }
                }
            }
        }
    }
    PointSet::new(rule.name(), ndim, npts, points)
}
