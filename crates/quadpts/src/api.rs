//! Curated API surface.
//!
//! Prefer these re-exports over deep module paths; internal layout may change.

// Generation
pub use crate::rules::{generate, generate_named, generate_with, RuleKind, RuleParams};
// 1-D provider
pub use crate::gauss::{GaussCfg, GaussLegendre, NodesWeights};
// Data types and errors
pub use crate::error::{QuadError, Result};
pub use crate::points::{IntPoint, PointSet};
// Stores
pub use crate::legacy::{Domain, LegacyTable};
pub use crate::registry::{ElementFamily, Registry, RuleSpec, StandardSets};
