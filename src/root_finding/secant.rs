//! Secant method

use crate::equation::Equation;
use super::algorithms::Algorithm;
use super::report::{RootFindingReport, TerminationReason, IterateRecord};
use super::tolerances::{dual_criterion_error, timed};
use super::evaluate::residual_checked;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;
use tracing::{debug, trace};


#[derive(Debug, Error)]
pub enum SecantError{
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: Q0={q0} and Q1={q1} must be finite")]
    InvalidGuess { q0: f64, q1: f64 },

    #[error("degenerate secant: |f(Q1) - f(Q0)| below tolerance, f(Q0)={fq0}, f(Q1)={fq1}")]
    DegenerateSecantStep { fq0: f64, fq1: f64 },
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol` and `max_iter`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
    pub(crate) fn from_common(common: CommonCfg) -> Self {
        Self { common }
    }
}
impl Default for SecantCfg {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(q0, fq0)` and `(q1, fq1)`
///
/// # Returns
/// - `Ok(q_next)` if `|fq1 - fq0| >= tol`
/// - `Err(DegenerateSecantStep)` otherwise; no fallback step is taken.
#[inline]
pub(crate) fn secant_x_intercept(
    (q0, fq0): (f64, f64),
    (q1, fq1): (f64, f64),
    tol: f64,
) -> Result<f64, SecantError> {
    let denom = fq1 - fq0;
    if denom.abs() < tol {
        return Err(SecantError::DegenerateSecantStep { fq0, fq1 });
    }

    Ok(q1 - fq1 * (q1 - q0) / denom)
}


/// Finds a root of `f(Q, C)` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `eq`  : [`Equation`] supplying `f(Q, C)`
/// - `c`   : equation parameter `C`
/// - `q0`  : first initial guess, finite
/// - `q1`  : second initial guess, finite
/// - `cfg` : [`SecantCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`               : converged iterate, or last iterate
/// - `iterations`         : 1-based count of the converging step, or `max_iter`
/// - `trace`              : `Q0`, `Q1` seeds (no error/time) followed by one
///                          entry per step holding the *new* iterate
/// - `termination_reason` : why it stopped
///
/// # Errors
/// - [`SecantError::InvalidGuess`]             : `q0` or `q1` NaN/inf
/// - [`SecantError::DegenerateSecantStep`]     : `|f(Q1) - f(Q0)| < tol`
///
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(Q)` produced NaN/inf
///
/// # Behavior
/// - Update:
///     - Q_{k+1} = Q_k - f(Q_k) * (Q_k - Q_{k-1}) / (f(Q_k) - f(Q_{k-1}))
///     - both residuals and the update are timed
///     - the window shifts `(Q0, Q1) <- (Q1, Q_next)` after each step
/// - Error: `min(|Q_next - Q1|, |f(Q_next, C)|)`; stops when `error < tol`.
/// - Exhausting `max_iter` is reported, not raised.
///
/// # Notes
/// - Equal guesses give equal residuals and hit the degeneracy check on the
///   first step.
pub fn secant<E>(
    eq: &E,
    c: f64,
    q0: f64,
    q1: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError>
where E: Equation + ?Sized {

    if !(q0.is_finite() && q1.is_finite()) {
        return Err(SecantError::InvalidGuess { q0, q1 });
    }

    let algorithm = Algorithm::Secant;
    let tol       = cfg.common.tol();
    let max_iter  = cfg.common.max_iter();
    if max_iter == 0 {
        return Err(RootFindingError::InvalidMaxIter { got: 0 }.into());
    }

    let mut trace = Vec::with_capacity(max_iter + algorithm.seed_entries());
    trace.push(IterateRecord::seed(q0));
    trace.push(IterateRecord::seed(q1));

    let mut q_parent2 = q0;
    let mut q_parent1 = q1;
    for iter in 1..=max_iter {
        let (q_next, elapsed) = timed(|| -> Result<f64, SecantError> {
            let fq0 = residual_checked(eq, q_parent2, c)?;
            let fq1 = residual_checked(eq, q_parent1, c)?;
            secant_x_intercept((q_parent2, fq0), (q_parent1, fq1), tol)
        })?;
        let f_next = residual_checked(eq, q_next, c)?;
        let error  = dual_criterion_error(q_next, q_parent1, f_next);

        trace!(algorithm = %algorithm, c, iter, q0 = q_parent2, q1 = q_parent1, q_next, error, "step");
        trace.push(IterateRecord::step(q_next, error, elapsed));

        if error < tol {
            debug!(algorithm = %algorithm, c, iterations = iter, root = q_next, "converged");
            return Ok(RootFindingReport {
                root               : q_next,
                iterations         : iter,
                trace,
                termination_reason : TerminationReason::ToleranceReached,
                algorithm,
            });
        }

        q_parent2 = q_parent1;
        q_parent1 = q_next;
    }

    debug!(algorithm = %algorithm, c, max_iter, last = q_parent1, "iteration limit reached");
    Ok(RootFindingReport {
        root               : q_parent1,
        iterations         : max_iter,
        trace,
        termination_reason : TerminationReason::IterationLimit,
        algorithm,
    })
}
