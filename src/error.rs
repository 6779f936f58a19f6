//! Error types for the TSP solver.

use thiserror::Error;

/// Result type alias for solver operations.
pub type TspResult<T> = Result<T, TspError>;

/// Failures surfaced to the caller.
///
/// Running out of time is not listed here: a timed-out search still returns
/// a [`SolveResult`](crate::bnb::SolveResult) carrying the best tour found.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Fewer than two cities were supplied.
    #[error("at least 2 cities are required, got {cities}")]
    InvalidInput {
        /// Number of cities supplied.
        cities: usize,
    },

    /// Explicit matrix data does not describe a square matrix.
    #[error("matrix data has {actual} entries, expected {expected}")]
    DimensionMismatch {
        /// Number of entries required.
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },

    /// A travel cost is negative or NaN.
    #[error("cost from {from} to {to} is {cost}, costs must be non-negative")]
    NegativeCost {
        /// Origin city index.
        from: usize,
        /// Destination city index.
        to: usize,
        /// Offending value.
        cost: f64,
    },

    /// Solver configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The search proved that no finite-cost Hamiltonian cycle exists.
    #[error("no feasible tour exists")]
    NoFeasibleTour,
}
