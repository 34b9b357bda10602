// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub(crate) mod config;
pub(crate) mod evaluate;
pub(crate) mod tolerances;

// algorithms
pub mod fixed_point;
pub mod newton;
pub mod secant;

pub use config::{CommonCfg, DEFAULT_TOL};
pub use algorithms::{Algorithm, DEFAULT_MAX_ITER};
pub use report::{IterateRecord, RootFindingReport, TerminationReason};
