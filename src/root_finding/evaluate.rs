//! Checked evaluation of the [`Equation`] operations.
//! - `residual_checked` : `f(Q, C)` with finite-check
//! - `map_checked`      : `phi(Q, C)` with finite-check
//!
//! Derivative checks are Newton-specific and live in `newton.rs`.

use crate::equation::Equation;
use super::errors::RootFindingError;


#[inline]
pub(crate) fn residual_checked<E: Equation + ?Sized>(
    eq: &E,
    q: f64,
    c: f64,
) -> Result<f64, RootFindingError> {
    let fq = eq.residual(q, c);
    if !fq.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { q, fq });
    }

    Ok(fq)
}


#[inline]
pub(crate) fn map_checked<E: Equation + ?Sized>(
    eq: &E,
    q: f64,
    c: f64,
) -> Result<f64, RootFindingError> {
    let phi = eq.fixed_point_map(q, c);
    if !phi.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { q, fq: phi });
    }

    Ok(phi)
}
