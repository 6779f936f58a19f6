//! Constructive heuristics that seed the branch-and-bound incumbent.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor from every start, O(n³)
//! - [`random_tour`] — Random permutations until one is feasible

//!
//! Both take an optional deadline and return the best tour found when it
//! passes. The first start or draw always runs.

use std::time::Instant;

mod nearest_neighbor;
mod random_tour;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use random_tour::random_tour;

fn past(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}
