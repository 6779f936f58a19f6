//! Solve outcome types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::SearchStatistics;
use crate::models::Tour;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// The frontier was exhausted; the returned tour is optimal.
    Optimal,
    /// The time budget ran out; the returned tour is the best found so far.
    TimedOut,
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Best tour found. `None` only when time ran out before any tour was
    /// known.
    pub tour: Option<Tour>,
    /// Cost of the best tour, or `f64::INFINITY` if there is none.
    pub cost: f64,
    /// How the search ended.
    pub status: SolveStatus,
    /// Wall-clock time spent, seeding included.
    pub elapsed: Duration,
    /// Number of times the search itself improved the incumbent. The
    /// heuristic seed is not counted.
    pub solutions_found: usize,
    /// Search counters.
    pub stats: SearchStatistics,
}

impl SolveResult {
    /// Returns `true` if the tour is proven optimal.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Returns `true` if the search stopped on the time budget.
    pub fn timed_out(&self) -> bool {
        self.status == SolveStatus::TimedOut
    }

    /// The best tour as a sequence of the caller's cities.
    ///
    /// Empty if no tour was found.
    pub fn route<'a, C>(&self, cities: &'a [C]) -> Vec<&'a C> {
        self.tour
            .as_ref()
            .map(|t| t.cities(cities))
            .unwrap_or_default()
    }
}
