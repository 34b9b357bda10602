//! Comparison error types.
//!
//! ┌ solver failures, tagged with the parameter value `C`
//! ├ non-convergence under [`IterationLimitPolicy::Fail`]
//! ├ invalid configuration
//! └ output failures
//!
//! [`IterationLimitPolicy::Fail`]: super::config::IterationLimitPolicy::Fail

use thiserror::Error;
use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::errors::{RootFindingError, ToleranceError};
use crate::root_finding::fixed_point::FixedPointError;
use crate::root_finding::newton::NewtonError;
use crate::root_finding::secant::SecantError;


#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("fixed point failed for C={c}: {source}")]
    FixedPoint { c: f64, source: FixedPointError },

    #[error("modified newton failed for C={c}: {source}")]
    Newton { c: f64, source: NewtonError },

    #[error("secant failed for C={c}: {source}")]
    Secant { c: f64, source: SecantError },

    #[error("{algorithm} did not converge for C={c} within {iterations} iterations")]
    NotConverged { algorithm: Algorithm, c: f64, iterations: usize },

    #[error("no parameter values supplied")]
    EmptyParameters,

    #[error("invalid parameter value at index {idx}: C={c} must be finite")]
    InvalidParameter { idx: usize, c: f64 },

    #[error("invalid initial guesses: Q0={q0} and Q1={q1} must be finite")]
    InvalidGuess { q0: f64, q1: f64 },

    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ComparisonError {
    /// Parameter value the failure belongs to, if it is tied to one.
    pub fn parameter(&self) -> Option<f64> {
        match self {
            ComparisonError::FixedPoint   { c, .. }
            | ComparisonError::Newton       { c, .. }
            | ComparisonError::Secant       { c, .. }
            | ComparisonError::NotConverged { c, .. } => Some(*c),
            _                                          => None,
        }
    }
}
