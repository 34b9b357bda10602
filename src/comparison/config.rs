//! Call-time configuration for a comparison run.
//!
//! [`ComparisonCfg`]
//! ├ `c_values`        : ordered parameter values `C`
//! ├ `q0`, `q1`        : shared initial guesses (`q1` used by secant only)
//! ├ `common`          : [`CommonCfg`] with `tol` and `max_iter`
//! ├ `on_limit`        : [`IterationLimitPolicy`]
//! └ `on_failure`      : [`FailurePolicy`]


use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::config::{CommonCfg, impl_common_cfg};
use crate::root_finding::fixed_point::FixedPointCfg;
use crate::root_finding::newton::NewtonCfg;
use crate::root_finding::secant::SecantCfg;
use super::errors::ComparisonError;


pub const DEFAULT_C_VALUES: [f64; 3] = [0.5, 1.0, 1.5];
pub const DEFAULT_Q0: f64 = 0.5;
pub const DEFAULT_Q1: f64 = 0.6;


/// What to do when a solver exhausts `max_iter` without meeting `tol`.
/// - [`IterationLimitPolicy::PerMethod`] : fixed point raises
///   [`ComparisonError::NotConverged`]; modified Newton and secant keep
///   their partial trace and list it
/// - [`IterationLimitPolicy::Report`]    : every method lists its partial trace
/// - [`IterationLimitPolicy::Fail`]      : every method raises
///   [`ComparisonError::NotConverged`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationLimitPolicy {
    #[default]
    PerMethod,
    Report,
    Fail,
}

impl IterationLimitPolicy {
    /// Whether hitting the iteration cap is fatal for `algorithm`.
    pub const fn is_fatal(self, algorithm: Algorithm) -> bool {
        match self {
            IterationLimitPolicy::PerMethod => matches!(algorithm, Algorithm::FixedPoint),
            IterationLimitPolicy::Report    => false,
            IterationLimitPolicy::Fail      => true,
        }
    }
}


/// What to do when any solver fails for one parameter value.
/// - [`FailurePolicy::Abort`]   : stop the whole batch with the error
/// - [`FailurePolicy::Isolate`] : record the failure and move on to the next `C`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    Abort,
    Isolate,
}


#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonCfg {
    c_values: Vec<f64>,
    q0: f64,
    q1: f64,
    common: CommonCfg,
    on_limit: IterationLimitPolicy,
    on_failure: FailurePolicy,
}

impl ComparisonCfg {
    /// Builds a configuration over `c_values` with default guesses,
    /// tolerance, iteration cap and policies.
    ///
    /// # Errors
    /// - [`ComparisonError::EmptyParameters`]  : `c_values` is empty
    /// - [`ComparisonError::InvalidParameter`] : some `C` is NaN/inf
    pub fn new(c_values: Vec<f64>) -> Result<Self, ComparisonError> {
        if c_values.is_empty() {
            return Err(ComparisonError::EmptyParameters);
        }
        if let Some((idx, &c)) = c_values.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(ComparisonError::InvalidParameter { idx, c });
        }

        Ok(Self {
            c_values,
            q0: DEFAULT_Q0,
            q1: DEFAULT_Q1,
            common: CommonCfg::new(),
            on_limit: IterationLimitPolicy::default(),
            on_failure: FailurePolicy::default(),
        })
    }

    // getters
    pub fn c_values(&self)   -> &[f64] { &self.c_values }
    pub fn q0(&self)         -> f64 { self.q0 }
    pub fn q1(&self)         -> f64 { self.q1 }
    pub fn on_limit(&self)   -> IterationLimitPolicy { self.on_limit }
    pub fn on_failure(&self) -> FailurePolicy { self.on_failure }

    pub fn set_guesses(mut self, q0: f64, q1: f64) -> Result<Self, ComparisonError> {
        if !(q0.is_finite() && q1.is_finite()) {
            return Err(ComparisonError::InvalidGuess { q0, q1 });
        }
        self.q0 = q0;
        self.q1 = q1;
        Ok(self)
    }

    #[must_use]
    pub fn set_on_limit(mut self, v: IterationLimitPolicy) -> Self {
        self.on_limit = v;
        self
    }

    #[must_use]
    pub fn set_on_failure(mut self, v: FailurePolicy) -> Self {
        self.on_failure = v;
        self
    }

    pub(crate) fn fixed_point_cfg(&self) -> FixedPointCfg {
        FixedPointCfg::from_common(self.common)
    }
    pub(crate) fn newton_cfg(&self) -> NewtonCfg {
        NewtonCfg::from_common(self.common)
    }
    pub(crate) fn secant_cfg(&self) -> SecantCfg {
        SecantCfg::from_common(self.common)
    }
}
impl_common_cfg!(ComparisonCfg);
