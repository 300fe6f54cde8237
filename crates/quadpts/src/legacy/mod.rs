//! Pre-tabulated point sets (line, quad, hex, triangle, tetrahedron).
//!
//! These are published constants, not derived by any algorithm here. They
//! are exposed through the same lookup contract as `Registry`, keyed by a
//! domain tag plus point count.
//!
//! Reference domains
//! - `lin`: `[-1,1]`; `qua`: `[-1,1]²`; `hex`: `[-1,1]³`.
//! - `tri`: triangle `(0,0),(1,0),(0,1)`; `tet`: tetrahedron with unit legs.

mod table;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{QuadError, Result};
use crate::points::{IntPoint, PointSet};

/// Reference domain tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Lin,
    Qua,
    Hex,
    Tri,
    Tet,
}

impl Domain {
    pub const ALL: [Domain; 5] = [Domain::Lin, Domain::Qua, Domain::Hex, Domain::Tri, Domain::Tet];

    pub fn tag(self) -> &'static str {
        match self {
            Domain::Lin => "lin",
            Domain::Qua => "qua",
            Domain::Hex => "hex",
            Domain::Tri => "tri",
            Domain::Tet => "tet",
        }
    }

    pub fn ndim(self) -> usize {
        match self {
            Domain::Lin => 1,
            Domain::Qua | Domain::Tri => 2,
            Domain::Hex | Domain::Tet => 3,
        }
    }

    /// Point counts present in the table for this domain.
    pub fn counts(self) -> &'static [usize] {
        match self {
            Domain::Lin => &[1, 2, 3, 4, 5],
            Domain::Qua => &[4, 9],
            Domain::Hex => &[8, 14, 27],
            Domain::Tri => &[1, 3, 12, 16],
            Domain::Tet => &[1, 4, 5, 6],
        }
    }

    fn rows(self, npts: usize) -> Option<Vec<[f64; 4]>> {
        match self {
            Domain::Lin => table::lin(npts),
            Domain::Qua => table::qua(npts),
            Domain::Hex => table::hex(npts),
            Domain::Tri => table::tri(npts),
            Domain::Tet => table::tet(npts),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Domain {
    type Err = QuadError;
    fn from_str(s: &str) -> Result<Self> {
        Domain::ALL
            .into_iter()
            .find(|d| d.tag() == s)
            .ok_or_else(|| QuadError::UnknownDomain(s.to_string()))
    }
}

/// All tabulated point sets, loaded once.
#[derive(Clone, Debug)]
pub struct LegacyTable {
    sets: BTreeMap<(Domain, usize), PointSet>,
}

impl LegacyTable {
    pub fn load() -> Result<Self> {
        let mut sets = BTreeMap::new();
        for domain in Domain::ALL {
            let ndim = domain.ndim();
            for &npts in domain.counts() {
                let Some(rows) = domain.rows(npts) else {
                    return Err(QuadError::InvalidConfiguration {
                        rule: domain.tag().to_string(),
                        dimension: ndim,
                        count: npts,
                        reason: "no tabulated rows".into(),
                    });
                };
                let points = rows
                    .iter()
                    .map(|r| IntPoint::new(r[..ndim].to_vec(), r[3]))
                    .collect();
                sets.insert((domain, npts), PointSet::new(domain.tag(), ndim, npts, points)?);
            }
        }
        tracing::debug!(sets = sets.len(), "legacy point table loaded");
        Ok(Self { sets })
    }

    pub fn lookup(&self, domain: Domain, npts: usize) -> Option<&PointSet> {
        self.sets.get(&(domain, npts))
    }

    /// Lookup by domain tag; unknown tags are simply absent.
    pub fn lookup_tag(&self, tag: &str, npts: usize) -> Option<&PointSet> {
        self.lookup(tag.parse().ok()?, npts)
    }

    pub fn keys(&self) -> impl Iterator<Item = (Domain, usize)> + '_ {
        self.sets.keys().copied()
    }
}

#[cfg(test)]
mod tests;
