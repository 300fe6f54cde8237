//! Registry of generated point sets.
//!
//! Model
//! - A `Registry` is built once from a list of `RuleSpec`s and is read-only
//!   afterwards; lookups by `(rule, count)` never regenerate anything.
//! - A failing spec aborts the whole build: no partially filled registry is
//!   ever handed out.
//! - `StandardSets` groups one registry per element family (`lin`, `qua`,
//!   `hex`) with the sets a typical finite-element host needs.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{QuadError, Result};
use crate::points::PointSet;
use crate::rules::{generate, RuleKind, RuleParams};

/// One requested configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuleSpec {
    pub rule: RuleKind,
    pub ndim: usize,
    pub npts: usize,
    pub params: RuleParams,
}

impl RuleSpec {
    #[inline]
    pub fn new(rule: RuleKind, ndim: usize, npts: usize) -> Self {
        Self {
            rule,
            ndim,
            npts,
            params: RuleParams::default(),
        }
    }
    #[inline]
    pub fn with_params(self, params: RuleParams) -> Self {
        Self { params, ..self }
    }
}

/// Immutable `(rule, count) -> PointSet` map.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    sets: BTreeMap<(RuleKind, usize), PointSet>,
}

impl Registry {
    /// Generate every spec; fails on the first generation error or duplicate key.
    pub fn build<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = RuleSpec>,
    {
        let mut sets = BTreeMap::new();
        for spec in specs {
            let key = (spec.rule, spec.npts);
            if sets.contains_key(&key) {
                return Err(QuadError::DuplicateEntry {
                    rule: spec.rule.name().to_string(),
                    count: spec.npts,
                });
            }
            let set = generate(spec.rule, spec.ndim, spec.npts, &spec.params)?;
            sets.insert(key, set);
        }
        Ok(Self { sets })
    }

    pub fn lookup(&self, rule: RuleKind, npts: usize) -> Option<&PointSet> {
        self.sets.get(&(rule, npts))
    }

    /// Lookup by rule name; unknown names are simply absent.
    pub fn lookup_named(&self, name: &str, npts: usize) -> Option<&PointSet> {
        let rule = name.parse::<RuleKind>().ok()?;
        self.lookup(rule, npts)
    }

    /// Keys in `(rule, count)` order.
    pub fn keys(&self) -> impl Iterator<Item = (RuleKind, usize)> + '_ {
        self.sets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Element families with their own registries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementFamily {
    Lin,
    Qua,
    Hex,
}

impl ElementFamily {
    pub const ALL: [ElementFamily; 3] = [
        ElementFamily::Lin,
        ElementFamily::Qua,
        ElementFamily::Hex,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ElementFamily::Lin => "lin",
            ElementFamily::Qua => "qua",
            ElementFamily::Hex => "hex",
        }
    }

    /// Configurations registered for this family by `StandardSets::build`.
    pub fn standard_specs(self) -> Vec<RuleSpec> {
        match self {
            ElementFamily::Lin => (1..=5).map(|n| RuleSpec::new(RuleKind::Le, 1, n)).collect(),
            ElementFamily::Qua => vec![
                RuleSpec::new(RuleKind::Le, 2, 4),
                RuleSpec::new(RuleKind::Le, 2, 9),
                RuleSpec::new(RuleKind::W5Corner, 2, 5),
                RuleSpec::new(RuleKind::W4Stable, 2, 5),
                RuleSpec::new(RuleKind::W8Fixed, 2, 8),
            ],
            ElementFamily::Hex => vec![
                RuleSpec::new(RuleKind::Le, 3, 8),
                RuleSpec::new(RuleKind::Le, 3, 27),
            ],
        }
    }
}

impl fmt::Display for ElementFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Standard point sets, one registry per element family.
#[derive(Clone, Debug)]
pub struct StandardSets {
    lin: Registry,
    qua: Registry,
    hex: Registry,
}

impl StandardSets {
    pub fn build() -> Result<Self> {
        let sets = Self {
            lin: Registry::build(ElementFamily::Lin.standard_specs())?,
            qua: Registry::build(ElementFamily::Qua.standard_specs())?,
            hex: Registry::build(ElementFamily::Hex.standard_specs())?,
        };
        tracing::info!(
            lin = sets.lin.len(),
            qua = sets.qua.len(),
            hex = sets.hex.len(),
            "standard point sets built"
        );
        Ok(sets)
    }

    pub fn family(&self, family: ElementFamily) -> &Registry {
        match family {
            ElementFamily::Lin => &self.lin,
            ElementFamily::Qua => &self.qua,
            ElementFamily::Hex => &self.hex,
        }
    }

    pub fn lookup(
        &self,
        family: ElementFamily,
        rule: RuleKind,
        npts: usize,
    ) -> Option<&PointSet> {
        self.family(family).lookup(rule, npts)
    }
}
