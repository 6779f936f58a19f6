//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a city, always travel to the
//! cheapest unvisited successor. The walk is repeated from every start city
//! and the cheapest finite tour is kept, since a single start can dead-end
//! on a sparse (partly infinite) matrix.
//!
//! # Complexity
//!
//! O(n³) for all starts, O(n²) per start.

use std::time::Instant;

use super::past;
use crate::matrix::CostMatrix;
use crate::models::Tour;

/// Constructs a tour using the nearest-neighbor heuristic from every start.
///
/// Returns `None` if no start city yields a tour whose edges, including
/// the closing edge, are all finite. The returned tour is rotated so that
/// it begins at city 0.
///
/// Once `deadline` passes no further start is tried and the best tour so far
/// is returned. The walk from city 0 always completes.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::CostMatrix;
/// use u_tsp::constructive::nearest_neighbor_tour;
///
/// let inf = f64::INFINITY;
/// let m = CostMatrix::from_rows(&[
///     vec![inf, 1.0, 9.0],
///     vec![9.0, inf, 1.0],
///     vec![1.0, 9.0, inf],
/// ]).unwrap();
/// let tour = nearest_neighbor_tour(&m, None).unwrap();
/// assert_eq!(tour.order(), &[0, 1, 2]);
/// assert_eq!(tour.cost(), 3.0);
/// ```
pub fn nearest_neighbor_tour(matrix: &CostMatrix, deadline: Option<Instant>) -> Option<Tour> {
    let mut best: Option<Tour> = None;
    for start in 0..matrix.size() {
        if start > 0 && past(deadline) {
            break;
        }
        let Some(order) = greedy_walk(matrix, start) else {
            continue;
        };
        let tour = Tour::assemble(rotate_to_zero(order), matrix);
        if !tour.is_feasible() {
            continue;
        }
        if best.as_ref().map_or(true, |b| tour.cost() < b.cost()) {
            best = Some(tour);
        }
    }
    best
}

/// Greedy walk from `start`; `None` if it reaches a city with no finite
/// edge to any unvisited city.
fn greedy_walk(matrix: &CostMatrix, start: usize) -> Option<Vec<usize>> {
    let n = matrix.size();
    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;

    while !unvisited.is_empty() {
        let next = matrix.nearest_neighbor(current, &unvisited)?;
        unvisited.retain(|&c| c != next);
        order.push(next);
        current = next;
    }
    Some(order)
}

pub(crate) fn rotate_to_zero(mut order: Vec<usize>) -> Vec<usize> {
    if let Some(pos) = order.iter().position(|&c| c == 0) {
        order.rotate_left(pos);
    }
    order
}
