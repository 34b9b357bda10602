//! Fixed-point, modified Newton and secant root finding on a scalar
//! equation `f(Q, C) = 0`, with per-iteration traces and a comparison
//! driver that renders them side by side.

pub mod equation;
pub mod root_finding;
pub mod comparison;
