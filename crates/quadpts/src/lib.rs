//! Quadrature point sets for finite-element reference domains.
//!
//! Layout
//! - `rules`: generator (tensor Gauss-Legendre, Wilson 5/8-point rules).
//! - `gauss`: 1-D Gauss-Legendre provider behind the `NodesWeights` seam.
//! - `registry`: build-once, read-only stores of generated sets.
//! - `legacy`: published tables for lin/qua/hex/tri/tet.
//!
//! API Policy
//! - `api` is the curated import surface; module paths may move.

pub mod api;
mod cfg;
pub mod error;
pub mod gauss;
pub mod legacy;
pub mod points;
pub mod registry;
pub mod rules;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{QuadError, Result};
pub use points::{IntPoint, PointSet};
pub use rules::{generate, generate_named, generate_with, RuleKind, RuleParams};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::QuadError;
    pub use crate::gauss::{GaussLegendre, NodesWeights};
    pub use crate::legacy::{Domain, LegacyTable};
    pub use crate::points::{IntPoint, PointSet};
    pub use crate::registry::{ElementFamily, Registry, RuleSpec, StandardSets};
    pub use crate::rules::{generate, generate_named, RuleKind, RuleParams};
}
