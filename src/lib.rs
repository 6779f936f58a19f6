//! # u-tsp
//!
//! Exact solver for the asymmetric travelling salesman problem using
//! reduced-cost-matrix branch and bound under a wall-clock time budget.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, CostTo trait, Tour)
//! - [`matrix`] — Cost matrix and row/column reduction
//! - [`constructive`] — Incumbent seeding heuristics (Nearest Neighbor, random)
//! - [`bnb`] — Branch-and-bound search, configuration, and results
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use u_tsp::models::City;
//!
//! let cities = vec![
//!     City::new(0, 0.0, 0.0),
//!     City::new(1, 4.0, 0.0),
//!     City::new(2, 4.0, 3.0),
//!     City::new(3, 0.0, 3.0),
//! ];
//! let result = u_tsp::solve(&cities, 10.0).unwrap();
//! assert!(result.is_optimal());
//! assert!((result.cost - 14.0).abs() < 1e-10);
//! assert_eq!(result.route(&cities).len(), 4);
//! ```

pub mod bnb;
pub mod constructive;
pub mod error;
pub mod matrix;
pub mod models;

use bnb::{BnbConfig, BranchAndBound, SolveResult};
use error::TspResult;
use matrix::CostMatrix;
use models::CostTo;

/// Finds a minimum-cost tour through `cities` within `time_budget_secs`.
///
/// Pass `f64::INFINITY` to search to completion. When the budget runs out
/// the best tour found so far is returned with
/// [`SolveStatus::TimedOut`](bnb::SolveStatus::TimedOut).
///
/// # Errors
///
/// - [`TspError::InvalidInput`](error::TspError::InvalidInput) for fewer than two cities
/// - [`TspError::NoFeasibleTour`](error::TspError::NoFeasibleTour) if no finite tour exists
/// - [`TspError::InvalidConfig`](error::TspError::InvalidConfig) for a zero or negative budget
pub fn solve<C: CostTo>(cities: &[C], time_budget_secs: f64) -> TspResult<SolveResult> {
    let config = BnbConfig::default().with_time_limit_secs(time_budget_secs);
    solve_with(cities, &config)
}

/// Like [`solve`], with full control over the search configuration.
pub fn solve_with<C: CostTo>(cities: &[C], config: &BnbConfig) -> TspResult<SolveResult> {
    let matrix = CostMatrix::from_cities(cities)?;
    BranchAndBound::run(&matrix, config)
}
