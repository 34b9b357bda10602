use approx::assert_abs_diff_eq;
use root_compare::equation::{Equation, ExponentialEquation, FnEquation};
use root_compare::root_finding::errors::RootFindingError;
use root_compare::root_finding::newton::{newton, NewtonCfg, NewtonError};
use root_compare::root_finding::report::TerminationReason;

type TestResult = Result<(), NewtonError>;

fn square_minus_c() -> impl Equation {
    FnEquation::new(
        |q: f64, c: f64| q * q - c,
        |q: f64, _c: f64| 2.0 * q,
        |q: f64, c: f64| 0.5 * (q + c / q),
    )
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let res = newton(&square_minus_c(), 2.0, 1.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.iterations, 3);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-5);
    assert_eq!(res.trace.len(), 3);
    assert_abs_diff_eq!(res.trace[0].value, 1.0);
    assert_abs_diff_eq!(res.trace[1].value, 1.5);
    assert!(res.final_error().is_some_and(|e| e < 1e-4));
    Ok(())
}

#[test]
fn finds_root_of_exponential_equation() -> TestResult {
    let res = newton(&ExponentialEquation, 1.5, 0.5, NewtonCfg::new())?;

    assert!(res.converged());
    assert!(ExponentialEquation.residual(res.root, 1.5).abs() < 1e-4);
    assert!(res.iterations < 100);
    Ok(())
}

#[test]
fn zero_derivative_at_guess() {
    let err = newton(&square_minus_c(), 1.0, 0.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::ZeroDerivative { q, dfq } if q == 0.0 && dfq == 0.0));
}

#[test]
fn zero_derivative_mid_iteration() {
    // f = (q - 1)^3 - c, flat at q = 1; the first step from 2 with c = -2 lands there
    let eq = FnEquation::new(
        |q: f64, c: f64| (q - 1.0).powi(3) - c,
        |q: f64, _c: f64| 3.0 * (q - 1.0).powi(2),
        |q: f64, _c: f64| q,
    );
    let err = newton(&eq, -2.0, 2.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::ZeroDerivative { q, .. } if q == 1.0));
}

#[test]
fn non_finite_derivative() {
    let eq = FnEquation::new(
        |q: f64, _c: f64| q,
        |_q: f64, _c: f64| f64::NAN,
        |q: f64, _c: f64| q,
    );
    let err = newton(&eq, 0.0, 1.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::DerivativeNotFinite { q, dfq } if q == 1.0 && dfq.is_nan()));
}

#[test]
fn non_finite_residual() {
    let eq = FnEquation::new(
        |q: f64, _c: f64| 1.0 / (q - 1.0),
        |_q: f64, _c: f64| 1.0,
        |q: f64, _c: f64| q,
    );
    let err = newton(&eq, 0.0, 1.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::NonFiniteEvaluation { q, fq })
        if q == 1.0 && fq.is_infinite()
    ));
}

#[test]
fn no_real_root_returns_partial_trace() -> TestResult {
    // |step| = (q^2 + 1) / 2|q| >= 1 and |f| >= 1, so the error never drops below 1
    let eq = FnEquation::new(
        |q: f64, _c: f64| q * q + 1.0,
        |q: f64, _c: f64| 2.0 * q,
        |q: f64, _c: f64| q,
    );
    let cfg = NewtonCfg::new().set_max_iter(5)?;

    let res = newton(&eq, 0.0, 0.5, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 5);
    assert_eq!(res.trace.len(), 5);
    assert!(res.trace.iter().all(|r| r.error.is_some_and(|e| e >= 1.0)));
    Ok(())
}

#[test]
fn invalid_guess() {
    let err = newton(&square_minus_c(), 2.0, f64::INFINITY, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::InvalidGuess { q0 } if q0.is_infinite()));
}

#[test]
fn invalid_max_iter_zero() {
    let err = NewtonCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}

#[test]
fn defaults() {
    let cfg = NewtonCfg::new();
    assert_eq!(cfg.tol(), 1e-4);
    assert_eq!(cfg.max_iter(), 100);
    assert_eq!(cfg, NewtonCfg::default());
}
