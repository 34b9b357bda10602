/// Scalar equation `f(Q, C) = 0` parameterized by a constant `C`.
///
/// Solvers only ever see an equation through these three operations.
pub trait Equation {
    /// residual `f(Q, C)`, zero at a root
    fn residual(&self, q: f64, c: f64) -> f64;

    /// derivative `df/dQ (Q, C)`
    fn derivative(&self, q: f64, c: f64) -> f64;

    /// fixed-point map `phi(Q, C)` whose fixed points are roots of the residual
    fn fixed_point_map(&self, q: f64, c: f64) -> f64;
}

impl<E: Equation + ?Sized> Equation for &E {
    #[inline]
    fn residual(&self, q: f64, c: f64) -> f64 {
        (**self).residual(q, c)
    }

    #[inline]
    fn derivative(&self, q: f64, c: f64) -> f64 {
        (**self).derivative(q, c)
    }

    #[inline]
    fn fixed_point_map(&self, q: f64, c: f64) -> f64 {
        (**self).fixed_point_map(q, c)
    }
}
