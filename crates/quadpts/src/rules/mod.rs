//! Rule generator.
//!
//! Purpose
//! - Turn a rule identity, a spatial dimension and a point count into a
//!   `PointSet`, either by tensor-producting 1-D Gauss-Legendre nodes or by
//!   evaluating Wilson's closed-form symmetric rules.
//!
//! Failure modes (all synchronous, nothing is cached on failure)
//! - `UnsupportedRule`: unknown name (string entry point only).
//! - `InvalidConfiguration`: dimension/count the rule cannot produce.
//! - `MissingParameter` / `InvalidParameter`: `W5` needs `w0 < 4`,
//!   `W8` needs `0 < wb < 1`.

mod kind;
mod tensor;
mod wilson;

pub use kind::{RuleKind, RuleParams};

use crate::error::Result;
use crate::gauss::{GaussLegendre, NodesWeights};
use crate::points::PointSet;

use wilson::{EightPoint, FivePoint};

/// Generate a point set with the default Gauss-Legendre provider.
pub fn generate(
    rule: RuleKind,
    ndim: usize,
    npts: usize,
    params: &RuleParams,
) -> Result<PointSet> {
    generate_with(&GaussLegendre::default(), rule, ndim, npts, params)
}

/// Generate a point set from a rule name (`"LE"`, `"W5corner"`, `"W4stable"`,
/// `"W5"`, `"W8fixed"`, `"W8"`).
pub fn generate_named(
    name: &str,
    ndim: usize,
    npts: usize,
    params: &RuleParams,
) -> Result<PointSet> {
    generate(name.parse()?, ndim, npts, params)
}

/// Generate a point set, taking 1-D nodes from `provider` for tensor rules.
pub fn generate_with<P>(
    provider: &P,
    rule: RuleKind,
    ndim: usize,
    npts: usize,
    params: &RuleParams,
) -> Result<PointSet>
where
    P: NodesWeights + ?Sized,
{
    let set = match rule {
        RuleKind::Le => tensor::gauss_legendre(provider, ndim, npts),
        RuleKind::W5Corner => wilson::five_point(rule, ndim, npts, || Ok(FivePoint::corner())),
        RuleKind::W4Stable => wilson::five_point(rule, ndim, npts, || Ok(FivePoint::stable())),
        RuleKind::W5 => wilson::five_point(rule, ndim, npts, || FivePoint::from_w0(params.w0)),
        RuleKind::W8Fixed => wilson::eight_point(rule, ndim, npts, || Ok(EightPoint::fixed())),
        RuleKind::W8 => wilson::eight_point(rule, ndim, npts, || EightPoint::from_wb(params.wb)),
    }?;
    tracing::debug!(rule = %rule, ndim, npts, wsum = set.weight_sum(), "generated");
    Ok(set)
}
