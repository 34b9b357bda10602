pub mod traits;
pub use traits::Equation;

pub mod closures;
pub mod exponential;
pub use closures::FnEquation;
pub use exponential::ExponentialEquation;
