//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates the compared methods,
//! along with the shared [`DEFAULT_MAX_ITER`] cap.


/// Iteration cap applied when `max_iter` is left unset in a config.
pub const DEFAULT_MAX_ITER: usize = 100;


/// Root-finding algorithm variants.
/// - [`Algorithm::FixedPoint`]     : `Q <- phi(Q, C)`
/// - [`Algorithm::ModifiedNewton`] : `Q <- Q - f(Q, C) / f'(Q, C)`
/// - [`Algorithm::Secant`]         : two-point secant update
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    FixedPoint,
    ModifiedNewton,
    Secant,
}

impl Algorithm {
    /// All compared algorithms, in the order they appear in a comparison table.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::FixedPoint,
        Algorithm::ModifiedNewton,
        Algorithm::Secant
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::FixedPoint     => "fixed_point",
            Algorithm::ModifiedNewton => "modified_newton",
            Algorithm::Secant         => "secant",
        }
    }

    /// Human-readable label used in the `Method` column of a comparison table.
    pub const fn display_name(self) -> &'static str {
        match self {
            Algorithm::FixedPoint     => "Fixed Point",
            Algorithm::ModifiedNewton => "Modified Newton",
            Algorithm::Secant         => "Secant",
        }
    }

    /// Number of seed entries prepended to a trace before the first iteration.
    /// Only the secant method seeds its trace (with `Q0` and `Q1`).
    pub const fn seed_entries(self) -> usize {
        match self {
            Algorithm::Secant => 2,
            _                 => 0,
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
