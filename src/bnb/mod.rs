//! Branch-and-bound search for the asymmetric TSP.
//!
//! - [`SearchState`] — Partial tour with its reduced matrix and lower bound
//! - [`BranchAndBound`] — Best-first search with pruning and a time budget
//! - [`BnbConfig`] — Time limit, pruning switch, incumbent seeding
//! - [`Incumbent`] — Best tour found so far
//! - [`SolveResult`] — Tour, cost, status and [`SearchStatistics`]

mod config;
mod engine;
mod frontier;
mod incumbent;
mod result;
mod state;
mod stats;

pub use config::{BnbConfig, SeedHeuristic};
pub use engine::BranchAndBound;
pub use incumbent::Incumbent;
pub use result::{SolveResult, SolveStatus};
pub use state::SearchState;
pub use stats::SearchStatistics;
