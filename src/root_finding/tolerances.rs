//! Convergence measures and step timing shared by the solvers.
//!
//! `dual_criterion_error` : min(|Q_next - Q|, |f(Q_next)|)
//! `timed`                : runs a step and returns its wall-clock seconds


use std::time::Instant;


/// Smaller of the step-to-step change and the residual magnitude at the
/// new iterate.
#[inline]
pub(crate) fn dual_criterion_error(q_next: f64, q: f64, f_next: f64) -> f64 {
    (q_next - q).abs().min(f_next.abs())
}


/// Runs `step` and returns its output with the elapsed wall-clock time in seconds.
#[inline]
pub(crate) fn timed<T, E>(
    step: impl FnOnce() -> Result<T, E>
) -> Result<(T, f64), E> {
    let start = Instant::now();
    let out   = step()?;
    Ok((out, start.elapsed().as_secs_f64()))
}
