//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms, and the per-iteration [`IterateRecord`].

use super::algorithms::Algorithm;


/// Reasons a root-finding algorithm may terminate.
/// - [`TerminationReason::ToleranceReached`] : dual-criterion error < `tol`
/// - [`TerminationReason::IterationLimit`]   : `max_iter` exhausted first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// One row of a convergence trace.
///
/// [`IterateRecord`]
/// - `value`   : iterate recorded for this pass
/// - `error`   : dual-criterion error, `None` for secant seed entries
/// - `elapsed` : seconds spent in the step's dominant computation,
///               `None` for secant seed entries
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterateRecord {
    pub value   : f64,
    pub error   : Option<f64>,
    pub elapsed : Option<f64>,
}
impl IterateRecord {
    pub fn step(value: f64, error: f64, elapsed: f64) -> Self {
        Self { value, error: Some(error), elapsed: Some(elapsed) }
    }
    pub fn seed(value: f64) -> Self {
        Self { value, error: None, elapsed: None }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// A run that exhausts `max_iter` is not an error: it comes back with
/// [`TerminationReason::IterationLimit`] and the partial trace, and the
/// caller decides whether that is fatal.
///
/// [`RootFindingReport`]
/// - `root`               : converged value, or last iterate on iteration limit
/// - `iterations`         : 1-based iteration count (`max_iter` on limit)
/// - `trace`              : ordered [`IterateRecord`]s for this run
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `algorithm`          : which method produced the report
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root               : f64,
    pub iterations         : usize,
    pub trace              : Vec<IterateRecord>,
    pub termination_reason : TerminationReason,
    pub algorithm          : Algorithm,
}

impl RootFindingReport {
    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.algorithm_name()
    }

    /// Error of the last non-seed trace entry.
    pub fn final_error(&self) -> Option<f64> {
        self.trace.iter().rev().find_map(|r| r.error)
    }

    /// Iterate values in trace order.
    pub fn values(&self) -> Vec<f64> {
        self.trace.iter().map(|r| r.value).collect()
    }

    /// Errors in trace order (seed entries included as `None`).
    pub fn errors(&self) -> Vec<Option<f64>> {
        self.trace.iter().map(|r| r.error).collect()
    }
}
