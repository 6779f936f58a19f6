//! Complete tours.

use serde::{Deserialize, Serialize};

use super::CostTo;
use crate::matrix::CostMatrix;

/// A closed tour: every city visited once, returning to the first.
///
/// The cost includes the closing edge from the last city back to the first.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::CostMatrix;
/// use u_tsp::models::Tour;
///
/// let inf = f64::INFINITY;
/// let m = CostMatrix::from_rows(&[
///     vec![inf, 1.0, 4.0],
///     vec![2.0, inf, 1.0],
///     vec![1.0, 3.0, inf],
/// ]).unwrap();
/// let tour = Tour::assemble(vec![0, 1, 2], &m);
/// assert_eq!(tour.cost(), 3.0);
/// assert_eq!(tour.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Builds a tour from a city-index path, pricing it against `matrix`.
    ///
    /// The cost is recomputed edge by edge from the unreduced matrix, so it
    /// matches what the caller's cost function would report.
    pub fn assemble(order: Vec<usize>, matrix: &CostMatrix) -> Self {
        let cost = matrix.cycle_cost(&order);
        Self { order, cost }
    }

    /// City indices in visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total cost including the closing edge.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if every edge of the tour is travelable.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }

    /// Maps the index path onto the caller's city list.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `cities`.
    pub fn cities<'a, C>(&self, cities: &'a [C]) -> Vec<&'a C> {
        self.order.iter().map(|&i| &cities[i]).collect()
    }

    /// Recomputes the cost through the cities' own cost function.
    pub fn cost_through<C: CostTo>(&self, cities: &[C]) -> f64 {
        let route = self.cities(cities);
        match (route.first(), route.last()) {
            (Some(first), Some(last)) if route.len() > 1 => {
                route
                    .windows(2)
                    .map(|w| w[0].cost_to(w[1]))
                    .sum::<f64>()
                    + last.cost_to(first)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn test_assemble_includes_closing_edge() {
        let m = CostMatrix::from_rows(&[
            vec![INF, 10.0, 15.0, 20.0],
            vec![5.0, INF, 9.0, 10.0],
            vec![6.0, 13.0, INF, 12.0],
            vec![8.0, 8.0, 9.0, INF],
        ])
        .expect("valid");
        let tour = Tour::assemble(vec![0, 1, 3, 2], &m);
        assert!((tour.cost() - 35.0).abs() < 1e-10);
        assert!(tour.is_feasible());
        assert_eq!(tour.order(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_assemble_infeasible() {
        let m = CostMatrix::from_rows(&[vec![INF, 1.0], vec![INF, INF]]).expect("valid");
        let tour = Tour::assemble(vec![0, 1], &m);
        assert!(!tour.is_feasible());
    }

    #[test]
    fn test_cities_and_cost_through() {
        let cities = vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 3.0, 0.0),
            City::new(2, 3.0, 4.0),
        ];
        let m = CostMatrix::from_cities(&cities).expect("valid");
        let tour = Tour::assemble(vec![0, 2, 1], &m);
        let route = tour.cities(&cities);
        assert_eq!(route[1].id(), 2);
        assert!((tour.cost_through(&cities) - 12.0).abs() < 1e-10);
        assert!((tour.cost_through(&cities) - tour.cost()).abs() < 1e-10);
    }

    #[test]
    fn test_empty_tour() {
        let m = CostMatrix::infinite(2);
        let tour = Tour::assemble(Vec::new(), &m);
        assert!(tour.is_empty());
        assert_eq!(tour.cost(), 0.0);
    }
}
