//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ non-finite residual or map evaluation
//! │   └ invalid global parameters (e.g. max_iter)
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     └ invalid input tolerance
//!
//! Method-specific failures (zero derivative, degenerate secant) live next
//! to their solver and wrap these two via `#[error(transparent)]`.


use thiserror::Error;


/// Root-finding runtime errors.
///
/// ┌ Non-finite function evaluation
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at Q={q}, value={fq}")]
    NonFiniteEvaluation { q: f64, fq: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Tolerance configuration errors.
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `tol` tolerance: must be finite and > 0. got {got}")]
    InvalidTol { got: f64 },
}
