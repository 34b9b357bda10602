//! root-compare CLI
//!
//! Solves `Q = exp(-C Q)` for each `C` with fixed-point iteration, modified
//! Newton and secant, and prints one comparison table per `C`.
//!
//! ```text
//! root-compare --c-values 0.5,1,1.5 --q0 0.5 --q1 0.6 --tol 1e-4 --max-iter 100
//! ```
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`, `debug` with
//! `--verbose`); stdout carries only the tables.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use root_compare::comparison::config::{DEFAULT_C_VALUES, DEFAULT_Q0, DEFAULT_Q1};
use root_compare::comparison::{
    run_comparison, ComparisonCfg, ComparisonError, FailurePolicy, IterationLimitPolicy,
};
use root_compare::equation::ExponentialEquation;
use root_compare::root_finding::{DEFAULT_MAX_ITER, DEFAULT_TOL};


/// Compare fixed-point, modified Newton and secant root finding
#[derive(Parser, Debug)]
#[command(name = "root-compare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Parameter values C, comma separated, compared in order
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true,
          default_values_t = DEFAULT_C_VALUES)]
    c_values: Vec<f64>,

    /// Initial guess shared by all methods
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_Q0)]
    q0: f64,

    /// Second initial guess for the secant method
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_Q1)]
    q1: f64,

    /// Tolerance on min(|Q_next - Q|, |f(Q_next)|)
    #[arg(long, default_value_t = DEFAULT_TOL)]
    tol: f64,

    /// Iteration cap per method
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Treat reaching the iteration cap as an error for every method
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// List partial traces for every method that reaches the iteration cap,
    /// fixed point included
    #[arg(long)]
    lenient: bool,

    /// Keep going with the next C when a method fails
    #[arg(long)]
    isolate_failures: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn comparison_cfg(&self) -> Result<ComparisonCfg, ComparisonError> {
        let on_limit = if self.strict {
            IterationLimitPolicy::Fail
        } else if self.lenient {
            IterationLimitPolicy::Report
        } else {
            IterationLimitPolicy::PerMethod
        };
        let on_failure = if self.isolate_failures {
            FailurePolicy::Isolate
        } else {
            FailurePolicy::Abort
        };

        Ok(ComparisonCfg::new(self.c_values.clone())?
            .set_guesses(self.q0, self.q1)?
            .set_tol(self.tol)?
            .set_max_iter(self.max_iter)?
            .set_on_limit(on_limit)
            .set_on_failure(on_failure))
    }
}


fn run(cli: &Cli) -> Result<(), ComparisonError> {
    let cfg = cli.comparison_cfg()?;
    info!(?cfg, "starting comparison");

    let stdout  = io::stdout();
    let summary = run_comparison(&ExponentialEquation, &cfg, &mut stdout.lock())?;
    info!(
        completed = summary.completed().count(),
        skipped = summary.failed().count(),
        "comparison finished"
    );

    Ok(())
}


fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "comparison failed");
            ExitCode::FAILURE
        }
    }
}
