//! tests for the secant root-finding algorithm
use approx::assert_abs_diff_eq;
use root_compare::equation::{Equation, ExponentialEquation, FnEquation};
use root_compare::root_finding::errors::RootFindingError;
use root_compare::root_finding::report::{IterateRecord, TerminationReason};
use root_compare::root_finding::secant::{secant, SecantCfg, SecantError};

type TestResult = Result<(), SecantError>;

fn square_minus_c() -> impl Equation {
    FnEquation::new(
        |q: f64, c: f64| q * q - c,
        |q: f64, _c: f64| 2.0 * q,
        |q: f64, c: f64| 0.5 * (q + c / q),
    )
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let res = secant(&square_minus_c(), 2.0, 1.0, 2.0, SecantCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.iterations, 4);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-5);
    Ok(())
}

#[test]
fn trace_is_seeded_with_both_guesses() -> TestResult {
    let res = secant(&square_minus_c(), 2.0, 1.0, 2.0, SecantCfg::new())?;

    assert_eq!(res.trace.len(), res.iterations + 2);
    assert_eq!(res.trace[0], IterateRecord::seed(1.0));
    assert_eq!(res.trace[1], IterateRecord::seed(2.0));
    assert!(res.trace[2..].iter().all(|r| r.error.is_some() && r.elapsed.is_some()));
    // step entries hold the new iterate
    assert_abs_diff_eq!(res.trace[2].value, 4.0 / 3.0, epsilon = 1e-12);
    assert_eq!(res.trace.last().map(|r| r.value), Some(res.root));
    Ok(())
}

#[test]
fn finds_root_of_exponential_equation() -> TestResult {
    let res = secant(&ExponentialEquation, 0.5, 0.5, 0.6, SecantCfg::new())?;

    assert!(res.converged());
    assert!(ExponentialEquation.residual(res.root, 0.5).abs() < 1e-4);
    Ok(())
}

#[test]
fn equal_residuals_are_degenerate() {
    // f(-1) == f(1) == 1
    let eq = FnEquation::new(
        |q: f64, _c: f64| q * q,
        |q: f64, _c: f64| 2.0 * q,
        |q: f64, _c: f64| q,
    );
    let err = secant(&eq, 0.0, -1.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::DegenerateSecantStep { fq0, fq1 } if fq0 == 1.0 && fq1 == 1.0));
}

#[test]
fn equal_guesses_are_degenerate() {
    let err = secant(&ExponentialEquation, 1.0, 0.5, 0.5, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::DegenerateSecantStep { .. }));
}

#[test]
fn near_equal_residuals_below_tol_are_degenerate() -> TestResult {
    // |f(Q1) - f(Q0)| = 1e-3 < tol = 1e-2
    let eq = FnEquation::new(
        |q: f64, _c: f64| 1e-3 * q + 5.0,
        |_q: f64, _c: f64| 1e-3,
        |q: f64, _c: f64| q,
    );
    let cfg = SecantCfg::new().set_tol(1e-2)?;
    let err = secant(&eq, 0.0, 0.0, 1.0, cfg).unwrap_err();

    assert!(matches!(err, SecantError::DegenerateSecantStep { .. }));
    Ok(())
}

#[test]
fn no_real_root_returns_partial_trace() -> TestResult {
    let eq = FnEquation::new(
        |q: f64, _c: f64| q * q + 1.0,
        |q: f64, _c: f64| 2.0 * q,
        |q: f64, _c: f64| q,
    );
    let cfg = SecantCfg::new().set_max_iter(3)?;

    let res = secant(&eq, 0.0, 0.5, 0.6, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 3);
    assert_eq!(res.trace.len(), 5);
    assert_eq!(res.trace.last().map(|r| r.value), Some(res.root));
    Ok(())
}

#[test]
fn invalid_guess() {
    let err = secant(&ExponentialEquation, 1.0, 0.5, f64::NAN, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::InvalidGuess { q0, q1 } if q0 == 0.5 && q1.is_nan()));
}

#[test]
fn non_finite_eval_on_initial() {
    let eq = FnEquation::new(
        |q: f64, _c: f64| 1.0 / q,
        |q: f64, _c: f64| -1.0 / (q * q),
        |q: f64, _c: f64| q,
    );
    let err = secant(&eq, 0.0, 0.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::NonFiniteEvaluation { q, fq })
        if q == 0.0 && fq.is_infinite()
    ));
}

#[test]
fn defaults() {
    let cfg = SecantCfg::new();
    assert_eq!(cfg.tol(), 1e-4);
    assert_eq!(cfg.max_iter(), 100);
    assert_eq!(cfg, SecantCfg::default());
}
