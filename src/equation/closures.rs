//! [`FnEquation`] : an [`Equation`] assembled from three closures.

use super::traits::Equation;


/// Equation built from plain functions.
///
/// # Fields
/// - `f`   : residual `f(Q, C)`
/// - `df`  : derivative `df/dQ (Q, C)`
/// - `phi` : fixed-point map `phi(Q, C)`
///
/// # Example
/// ```
/// use root_compare::equation::{Equation, FnEquation};
///
/// // x^2 - C, root sqrt(C)
/// let eq = FnEquation::new(
///     |q: f64, c: f64| q * q - c,
///     |q: f64, _c: f64| 2.0 * q,
///     |q: f64, c: f64| 0.5 * (q + c / q),
/// );
/// assert_eq!(eq.residual(2.0, 4.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnEquation<F, G, P> {
    f   : F,
    df  : G,
    phi : P,
}

impl<F, G, P> FnEquation<F, G, P>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
    P: Fn(f64, f64) -> f64,
{
    pub fn new(f: F, df: G, phi: P) -> Self {
        Self { f, df, phi }
    }
}

impl<F, G, P> Equation for FnEquation<F, G, P>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
    P: Fn(f64, f64) -> f64,
{
    #[inline]
    fn residual(&self, q: f64, c: f64) -> f64 {
        (self.f)(q, c)
    }

    #[inline]
    fn derivative(&self, q: f64, c: f64) -> f64 {
        (self.df)(q, c)
    }

    #[inline]
    fn fixed_point_map(&self, q: f64, c: f64) -> f64 {
        (self.phi)(q, c)
    }
}
