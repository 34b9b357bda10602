//! Runs all three solvers over each parameter value and lists their traces.
//!
//! [`compare_parameter`] : one `C`, three reports, policies applied
//! [`run_comparison`]    : every `C` in order, tables streamed to a writer

use std::fmt;
use std::io;
use tracing::{info, warn};

use crate::equation::Equation;
use crate::root_finding::fixed_point::fixed_point;
use crate::root_finding::newton::newton;
use crate::root_finding::secant::secant;
use crate::root_finding::report::RootFindingReport;
use super::config::{ComparisonCfg, FailurePolicy, IterationLimitPolicy};
use super::errors::ComparisonError;
use super::table::write_table;


/// The three reports produced for one parameter value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterComparison {
    pub c           : f64,
    pub fixed_point : RootFindingReport,
    pub newton      : RootFindingReport,
    pub secant      : RootFindingReport,
}

impl ParameterComparison {
    /// Reports in table order: fixed point, modified Newton, secant.
    pub fn reports(&self) -> [&RootFindingReport; 3] {
        [&self.fixed_point, &self.newton, &self.secant]
    }
}
impl fmt::Display for ParameterComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, self.c, &self.reports())
    }
}


/// Result for one parameter value of a batch.
#[derive(Debug)]
pub enum ParameterOutcome {
    Completed(ParameterComparison),
    Failed { c: f64, error: ComparisonError },
}
impl ParameterOutcome {
    pub fn c(&self) -> f64 {
        match self {
            ParameterOutcome::Completed(cmp)  => cmp.c,
            ParameterOutcome::Failed { c, .. } => *c,
        }
    }
}


/// Per-parameter outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct ComparisonSummary {
    pub outcomes: Vec<ParameterOutcome>,
}
impl ComparisonSummary {
    pub fn completed(&self) -> impl Iterator<Item = &ParameterComparison> {
        self.outcomes.iter().filter_map(|o| match o {
            ParameterOutcome::Completed(cmp) => Some(cmp),
            ParameterOutcome::Failed { .. }  => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (f64, &ComparisonError)> {
        self.outcomes.iter().filter_map(|o| match o {
            ParameterOutcome::Failed { c, error } => Some((*c, error)),
            ParameterOutcome::Completed(_)        => None,
        })
    }
}


fn check_limit(
    report: &RootFindingReport,
    c: f64,
    policy: IterationLimitPolicy,
) -> Result<(), ComparisonError> {
    if report.converged() {
        return Ok(());
    }

    if policy.is_fatal(report.algorithm) {
        return Err(ComparisonError::NotConverged {
            algorithm  : report.algorithm,
            c,
            iterations : report.iterations,
        });
    }

    warn!(
        algorithm = %report.algorithm,
        c,
        iterations = report.iterations,
        last = report.root,
        "tolerance not reached; listing partial trace"
    );
    Ok(())
}


/// Runs fixed point, modified Newton and secant for one `C`.
///
/// # Arguments
/// - `eq`  : [`Equation`] under study
/// - `c`   : parameter value
/// - `cfg` : [`ComparisonCfg`] supplying guesses, `tol`, `max_iter` and the
///           iteration-limit policy
///
/// # Errors
/// - [`ComparisonError::FixedPoint`] / [`ComparisonError::Newton`] /
///   [`ComparisonError::Secant`] : the solver failed, tagged with `c`
/// - [`ComparisonError::NotConverged`] : a solver hit `max_iter` and the
///   [`IterationLimitPolicy`] makes that fatal for it (fixed point by default)
pub fn compare_parameter<E>(
    eq: &E,
    c: f64,
    cfg: &ComparisonCfg,
) -> Result<ParameterComparison, ComparisonError>
where E: Equation + ?Sized {
    let (q0, q1) = (cfg.q0(), cfg.q1());

    let fixed_point = fixed_point(eq, c, q0, cfg.fixed_point_cfg())
        .map_err(|source| ComparisonError::FixedPoint { c, source })?;
    check_limit(&fixed_point, c, cfg.on_limit())?;

    let newton = newton(eq, c, q0, cfg.newton_cfg())
        .map_err(|source| ComparisonError::Newton { c, source })?;
    check_limit(&newton, c, cfg.on_limit())?;

    let secant = secant(eq, c, q0, q1, cfg.secant_cfg())
        .map_err(|source| ComparisonError::Secant { c, source })?;
    check_limit(&secant, c, cfg.on_limit())?;

    Ok(ParameterComparison { c, fixed_point, newton, secant })
}


/// Compares the three solvers for every `C` in `cfg`, writing each table to
/// `out` as soon as its parameter completes.
///
/// # Behavior
/// - [`FailurePolicy::Abort`]   : the first failure is returned; tables of
///   earlier parameters have already been written, none is written for the
///   failing one.
/// - [`FailurePolicy::Isolate`] : failures are logged and recorded as
///   [`ParameterOutcome::Failed`]; the batch continues.
/// - Write errors always abort.
pub fn run_comparison<E, W>(
    eq: &E,
    cfg: &ComparisonCfg,
    out: &mut W,
) -> Result<ComparisonSummary, ComparisonError>
where
    E: Equation + ?Sized,
    W: io::Write,
{
    let mut summary = ComparisonSummary::default();
    for &c in cfg.c_values() {
        info!(c, "comparing solvers");
        match compare_parameter(eq, c, cfg) {
            Ok(cmp) => {
                write!(out, "{cmp}")?;
                summary.outcomes.push(ParameterOutcome::Completed(cmp));
            }
            Err(error) => match cfg.on_failure() {
                FailurePolicy::Abort   => return Err(error),
                FailurePolicy::Isolate => {
                    warn!(c, %error, "skipping parameter");
                    summary.outcomes.push(ParameterOutcome::Failed { c, error });
                }
            },
        }
    }
    out.flush()?;

    Ok(summary)
}


/// [`run_comparison`] without any table output.
pub fn compare_all<E>(
    eq: &E,
    cfg: &ComparisonCfg,
) -> Result<ComparisonSummary, ComparisonError>
where E: Equation + ?Sized {
    run_comparison(eq, cfg, &mut io::sink())
}
