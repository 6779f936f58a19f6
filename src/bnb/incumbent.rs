//! Best solution so far.
//!
//! The incumbent is owned by a single search run and handed by `&mut` to
//! whatever may improve it, so every update site is visible in a signature.

use log::debug;

use crate::models::Tour;

/// Holds the best complete tour found so far and its cost.
///
/// The cost is the pruning threshold: `f64::INFINITY` until a tour is known.
#[derive(Debug, Clone, Default)]
pub struct Incumbent {
    best: Option<Tour>,
    improvements: usize,
}

impl Incumbent {
    /// Creates an empty incumbent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an incumbent from a heuristic seed tour.
    ///
    /// Seeding does not count as an improvement. Infeasible seeds are ignored.
    pub fn seeded(seed: Option<Tour>) -> Self {
        Self {
            best: seed.filter(Tour::is_feasible),
            improvements: 0,
        }
    }

    /// Current upper bound on the optimal cost.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, Tour::cost)
    }

    /// Returns `true` if a state with the given lower bound cannot lead to
    /// a strictly better tour.
    #[inline]
    pub fn dominates(&self, lower_bound: f64) -> bool {
        lower_bound >= self.cost()
    }

    /// Installs `tour` if it is feasible and strictly cheaper than the
    /// current best. Returns whether it was installed.
    pub fn try_install(&mut self, tour: Tour) -> bool {
        if !tour.is_feasible() || tour.cost() >= self.cost() {
            return false;
        }
        debug!("incumbent improved: {} -> {}", self.cost(), tour.cost());
        self.best = Some(tour);
        self.improvements += 1;
        true
    }

    /// The best tour, if any.
    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Number of successful [`try_install`](Self::try_install) calls.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    /// Consumes the incumbent, returning the best tour.
    pub fn into_best(self) -> Option<Tour> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CostMatrix;

    const INF: f64 = f64::INFINITY;

    fn matrix() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![INF, 1.0, 5.0],
            vec![5.0, INF, 1.0],
            vec![1.0, 5.0, INF],
        ])
        .expect("valid")
    }

    #[test]
    fn test_empty_incumbent() {
        let inc = Incumbent::new();
        assert_eq!(inc.cost(), INF);
        assert!(!inc.dominates(1e12));
        assert!(inc.best().is_none());
    }

    #[test]
    fn test_try_install_strictly_better() {
        let m = matrix();
        let mut inc = Incumbent::new();
        assert!(inc.try_install(Tour::assemble(vec![0, 2, 1], &m)));
        assert_eq!(inc.cost(), 15.0);
        assert!(inc.try_install(Tour::assemble(vec![0, 1, 2], &m)));
        assert_eq!(inc.cost(), 3.0);
        // Equal cost is not an improvement.
        assert!(!inc.try_install(Tour::assemble(vec![0, 1, 2], &m)));
        assert_eq!(inc.improvements(), 2);
        assert!(inc.dominates(3.0));
        assert!(!inc.dominates(2.5));
    }

    #[test]
    fn test_seeded_does_not_count() {
        let m = matrix();
        let inc = Incumbent::seeded(Some(Tour::assemble(vec![0, 1, 2], &m)));
        assert_eq!(inc.cost(), 3.0);
        assert_eq!(inc.improvements(), 0);
    }

    #[test]
    fn test_infeasible_rejected() {
        let m = CostMatrix::infinite(2);
        let inc = Incumbent::seeded(Some(Tour::assemble(vec![0, 1], &m)));
        assert!(inc.best().is_none());
        let mut inc = Incumbent::new();
        assert!(!inc.try_install(Tour::assemble(vec![0, 1], &m)));
    }
}
