pub mod config;
pub mod errors;
pub mod table;
pub mod driver;

pub use config::{ComparisonCfg, FailurePolicy, IterationLimitPolicy};
pub use errors::ComparisonError;
pub use driver::{
    compare_all, compare_parameter, run_comparison,
    ComparisonSummary, ParameterComparison, ParameterOutcome,
};
