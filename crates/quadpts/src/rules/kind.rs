//! Rule identities and their parameter schema.

use std::fmt;
use std::str::FromStr;

use crate::error::{QuadError, Result};

/// Known rule families.
///
/// - `Le`: tensor-product Gauss-Legendre (1D/2D/3D, `count = n1d^dim`).
/// - `W5Corner`, `W4Stable`, `W5`: Wilson's 5-point rules on the square.
/// - `W8Fixed`, `W8`: Wilson's 8-point rules on the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    Le,
    W5Corner,
    W4Stable,
    W5,
    W8Fixed,
    W8,
}

impl RuleKind {
    pub const ALL: [RuleKind; 6] = [
        RuleKind::Le,
        RuleKind::W5Corner,
        RuleKind::W4Stable,
        RuleKind::W5,
        RuleKind::W8Fixed,
        RuleKind::W8,
    ];

    /// Canonical name (`"LE"`, `"W5corner"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Le => "LE",
            RuleKind::W5Corner => "W5corner",
            RuleKind::W4Stable => "W4stable",
            RuleKind::W5 => "W5",
            RuleKind::W8Fixed => "W8fixed",
            RuleKind::W8 => "W8",
        }
    }

    /// Name of the parameter this rule cannot be built without.
    pub fn required_param(self) -> Option<&'static str> {
        match self {
            RuleKind::W5 => Some("w0"),
            RuleKind::W8 => Some("wb"),
            _ => None,
        }
    }

    /// Highest polynomial degree integrated exactly on `[-1,1]^dim`.
    ///
    /// For `Le` this holds in each variable separately; for the Wilson rules it
    /// is a total degree. `None` when the shape is not supported by the rule.
    pub fn degree(self, ndim: usize, npts: usize) -> Option<usize> {
        match self {
            RuleKind::Le => {
                let n1d = super::tensor::points_per_axis(ndim, npts)?;
                Some(2 * n1d - 1)
            }
            RuleKind::W5Corner | RuleKind::W4Stable | RuleKind::W5 => {
                (ndim == 2 && npts == 5).then_some(3)
            }
            RuleKind::W8Fixed => (ndim == 2 && npts == 8).then_some(5),
            RuleKind::W8 => (ndim == 2 && npts == 8).then_some(3),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = QuadError;
    fn from_str(s: &str) -> Result<Self> {
        RuleKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| QuadError::UnsupportedRule(s.to_string()))
    }
}

/// Tunable parameters of the parameterized Wilson rules.
///
/// - `w0`: centroid weight for `W5`.
/// - `wb`: axis-point weight for `W8`.
///
/// Fields not used by a rule are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RuleParams {
    pub w0: Option<f64>,
    pub wb: Option<f64>,
}

impl RuleParams {
    #[inline]
    pub fn with_w0(w0: f64) -> Self {
        Self {
            w0: Some(w0),
            ..Self::default()
        }
    }
    #[inline]
    pub fn with_wb(wb: f64) -> Self {
        Self {
            wb: Some(wb),
            ..Self::default()
        }
    }
}
