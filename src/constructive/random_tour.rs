//! Random-permutation tour construction.
//!
//! Draws random permutations until one has only finite edges or the attempt
//! budget runs out. Cheap and quality-blind; on sparse matrices where the
//! nearest-neighbor walk dead-ends from every start it can still find a
//! first incumbent.

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

use super::nearest_neighbor::rotate_to_zero;
use super::past;
use crate::matrix::CostMatrix;
use crate::models::Tour;

/// Returns the first feasible random tour found within `attempts` draws.
///
/// Stops drawing once `deadline` passes; the first draw always runs.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::CostMatrix;
/// use u_tsp::constructive::random_tour;
///
/// let inf = f64::INFINITY;
/// let m = CostMatrix::from_rows(&[
///     vec![inf, 1.0, 1.0],
///     vec![1.0, inf, 1.0],
///     vec![1.0, 1.0, inf],
/// ]).unwrap();
/// let mut rng = u_numflow::random::create_rng(42);
/// let tour = random_tour(&m, 10, None, &mut rng).unwrap();
/// assert_eq!(tour.cost(), 3.0);
/// ```
pub fn random_tour<R: Rng>(
    matrix: &CostMatrix,
    attempts: usize,
    deadline: Option<Instant>,
    rng: &mut R,
) -> Option<Tour> {
    let mut perm: Vec<usize> = (0..matrix.size()).collect();
    for attempt in 0..attempts {
        if attempt > 0 && past(deadline) {
            break;
        }
        perm.shuffle(rng);
        if matrix.cycle_cost(&perm).is_finite() {
            return Some(Tour::assemble(rotate_to_zero(perm), matrix));
        }
    }
    None
}
