//! Built-in equation `Q = exp(-C Q)`.
//!
//! - residual    : `f(Q, C)   = Q - exp(-C Q)`
//! - derivative  : `f'(Q, C)  = 1 + C exp(-C Q)`
//! - map         : `phi(Q, C) = exp(-C Q)`
//!
//! For `C > 0` the residual is strictly increasing with a single root in
//! `(0, 1)`, and `|phi'| = C Q* < 1` at the root for `C` up to `e`, so all
//! three methods converge from guesses near `0.5`.

use super::traits::Equation;


#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialEquation;

impl Equation for ExponentialEquation {
    #[inline]
    fn residual(&self, q: f64, c: f64) -> f64 {
        q - (-c * q).exp()
    }

    #[inline]
    fn derivative(&self, q: f64, c: f64) -> f64 {
        1.0 + c * (-c * q).exp()
    }

    #[inline]
    fn fixed_point_map(&self, q: f64, c: f64) -> f64 {
        (-c * q).exp()
    }
}
