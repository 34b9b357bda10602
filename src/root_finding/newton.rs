//! Modified Newton method

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
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: Q0={q0} must be finite")]
    InvalidGuess { q0: f64 },

    #[error("derivative is zero at Q={q}, f'(Q)={dfq}; newton step undefined")]
    ZeroDerivative { q: f64, dfq: f64 },

    #[error("derivative non-finite at Q={q}, f'(Q)={dfq}")]
    DerivativeNotFinite { q: f64, dfq: f64 },
}


/// Modified Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol` and `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
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
impl Default for NewtonCfg {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(NewtonCfg);


/// Evaluates the analytic derivative, rejecting exact zeros and NaN/inf.
#[inline]
fn derivative_checked<E>(
    eq: &E,
    q: f64,
    c: f64,
) -> Result<f64, NewtonError> where E: Equation + ?Sized {
    let dfq = eq.derivative(q, c);
    if !dfq.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { q, dfq });
    }
    if dfq == 0.0 {
        return Err(NewtonError::ZeroDerivative { q, dfq });
    }

    Ok(dfq)
}


/// Finds a root of `f(Q, C)` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with the equation's analytic derivative.
///
/// # Arguments
/// - `eq`  : [`Equation`] supplying `f(Q, C)` and `f'(Q, C)`
/// - `c`   : equation parameter `C`
/// - `q0`  : finite initial guess
/// - `cfg` : [`NewtonCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`               : `Q_next` of the converging step, or last iterate
/// - `iterations`         : 1-based count of the converging step, or `max_iter`
/// - `trace`              : one entry per step, `(Q, error, step time)`
/// - `termination_reason` : why it stopped
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]             : `q0` non-finite
/// - [`NewtonError::ZeroDerivative`]           : `f'(Q) == 0.0` exactly
/// - [`NewtonError::DerivativeNotFinite`]      : `f'(Q)` NaN/inf
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(Q)` produced NaN/inf
///
/// # Behavior
/// - Step: `Q_next = Q - f(Q) / f'(Q)`; derivative, residual and update are timed.
/// - No perturbation or fallback when the derivative vanishes.
/// - Error: `min(|Q_next - Q|, |f(Q_next, C)|)`, recorded against the
///   pre-update `Q`. Stops when `error < tol`.
/// - Exhausting `max_iter` is reported, not raised:
///   [`TerminationReason::IterationLimit`] with the last iterate.
///
/// # Notes
/// - Convergence is *local only*; poor guesses can diverge or cycle.
pub fn newton<E>(
    eq: &E,
    c: f64,
    q0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where E: Equation + ?Sized {

    if !q0.is_finite() {
        return Err(NewtonError::InvalidGuess { q0 });
    }

    let algorithm = Algorithm::ModifiedNewton;
    let tol       = cfg.common.tol();
    let max_iter  = cfg.common.max_iter();
    if max_iter == 0 {
        return Err(RootFindingError::InvalidMaxIter { got: 0 }.into());
    }

    let mut trace = Vec::with_capacity(max_iter);
    let mut q = q0;
    for iter in 1..=max_iter {
        let (q_next, elapsed) = timed(|| -> Result<f64, NewtonError> {
            let dfq = derivative_checked(eq, q, c)?;
            let fq  = residual_checked(eq, q, c)?;
            Ok(q - fq / dfq)
        })?;
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
