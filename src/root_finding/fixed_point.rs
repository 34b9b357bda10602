//! Fixed-point iteration

use crate::equation::Equation;
use super::algorithms::Algorithm;
use super::report::{RootFindingReport, TerminationReason, IterateRecord};
use super::tolerances::{dual_criterion_error, timed};
use super::evaluate::{map_checked, residual_checked};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;
use tracing::{debug, trace};


#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: Q0={q0} must be finite")]
    InvalidGuess { q0: f64 },
}


/// Fixed-point configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol` and `max_iter`.
///
/// # Construction
/// - Use [`FixedPointCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
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
impl Default for FixedPointCfg {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(FixedPointCfg);


/// Finds a fixed point `Q = phi(Q, C)` of the equation's map by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration).
///
/// # Arguments
/// - `eq`  : [`Equation`] supplying `phi(Q, C)` and the residual `f(Q, C)`
/// - `c`   : equation parameter `C`
/// - `q0`  : finite initial guess
/// - `cfg` : [`FixedPointCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`               : `Q_next` of the converging step, or last iterate
/// - `iterations`         : 1-based count of the converging step, or `max_iter`
/// - `trace`              : one entry per step, `(Q, error, time of phi)`
/// - `termination_reason` : [`TerminationReason::ToleranceReached`] or
///                          [`TerminationReason::IterationLimit`]
///
/// # Errors
/// - [`FixedPointError::InvalidGuess`]          : `q0` non-finite
///
/// * Propagated via [`FixedPointError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`]  : `phi` or `f` produced NaN/inf
///
/// # Behavior
/// - Step: `Q_next = phi(Q, C)`; only the map application is timed.
/// - Error: `min(|Q_next - Q|, |f(Q_next, C)|)`, recorded against the
///   pre-update `Q`.
/// - Stops when `error < tol`.
///
/// # Notes
/// - Converges locally when `|phi'| < 1` near the fixed point; otherwise the
///   run ends with [`TerminationReason::IterationLimit`].
pub fn fixed_point<E>(
    eq: &E,
    c: f64,
    q0: f64,
    cfg: FixedPointCfg,
) -> Result<RootFindingReport, FixedPointError>
where E: Equation + ?Sized {

    if !q0.is_finite() {
        return Err(FixedPointError::InvalidGuess { q0 });
    }

    let algorithm = Algorithm::FixedPoint;
    let tol       = cfg.common.tol();
    let max_iter  = cfg.common.max_iter();
    if max_iter == 0 {
        return Err(RootFindingError::InvalidMaxIter { got: 0 }.into());
    }

    let mut trace = Vec::with_capacity(max_iter);
    let mut q = q0;
    for iter in 1..=max_iter {
        let (q_next, elapsed) = timed(|| map_checked(eq, q, c))?;
        let f_next = residual_checked(eq, q_next, c)?;
        let error  = dual_criterion_error(q_next, q, f_next);

        trace!(algorithm = %algorithm, c, iter, q, q_next, error, "step");
        trace.push(IterateRecord::step(q, error, elapsed));

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
        q = q_next;
    }

    debug!(algorithm = %algorithm, c, max_iter, last = q, "iteration limit reached");
    Ok(RootFindingReport {
        root               : q,
        iterations         : max_iter,
        trace,
        termination_reason : TerminationReason::IterationLimit,
        algorithm,
    })
}
