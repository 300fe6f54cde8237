//! Error type shared by the generator, the registries and the legacy table.
//!
//! All failures are configuration-class: generation is pure and deterministic,
//! so the same inputs always fail the same way and there is nothing to retry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadError {
    #[error("rule {0:?} is not available")]
    UnsupportedRule(String),

    #[error("rule {rule} cannot produce {count} points in {dimension}D: {reason}")]
    InvalidConfiguration {
        rule: String,
        dimension: usize,
        count: usize,
        reason: String,
    },

    #[error("rule {rule} requires parameter {param:?}")]
    MissingParameter { rule: String, param: &'static str },

    #[error("rule {rule}: parameter {param:?} = {value} is outside its valid range")]
    InvalidParameter {
        rule: String,
        param: &'static str,
        value: f64,
    },

    #[error("point set ({rule}, {count}) is already registered")]
    DuplicateEntry { rule: String, count: usize },

    #[error("unknown reference domain {0:?}")]
    UnknownDomain(String),
}

pub type Result<T> = std::result::Result<T, QuadError>;
