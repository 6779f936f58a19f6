//! Branch-and-bound execution engine.
//!
//! # Algorithm
//!
//! 1. Seed the incumbent with a heuristic tour (nearest neighbor, random)
//! 2. Reduce the full matrix to get the root state and its lower bound
//! 3. Repeatedly pop the frontier state with the lowest bound:
//!    a. Drop it if the incumbent has since reached its bound
//!    b. Otherwise expand it to every unvisited city; complete tours may
//!       replace the incumbent, partial ones join the frontier only if their
//!       bound is below the incumbent cost
//! 4. Stop when the frontier is empty (optimal) or time runs out
//!
//! # Reference
//!
//! Little, J.D.C., Murty, K.G., Sweeney, D.W., Karel, C. (1963). "An
//! algorithm for the traveling salesman problem", *Operations Research*
//! 11(6), 972-989.

use log::{debug, info, trace};
use std::ops::ControlFlow;
use std::time::Instant;

use super::config::{BnbConfig, SeedHeuristic};
use super::frontier::Frontier;
use super::incumbent::Incumbent;
use super::result::{SolveResult, SolveStatus};
use super::state::{PendingState, SearchState};
use super::stats::SearchStatistics;
use crate::constructive::{nearest_neighbor_tour, random_tour};
use crate::error::{TspError, TspResult};
use crate::matrix::CostMatrix;
use crate::models::Tour;

/// Branch-and-bound runner.
pub struct BranchAndBound;

impl BranchAndBound {
    /// Searches for a minimum-cost tour through `matrix`.
    ///
    /// Returns [`TspError::NoFeasibleTour`] only when the search has proven
    /// that no finite tour exists. Running out of time is reported through
    /// [`SolveStatus::TimedOut`] on an `Ok` result.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::bnb::{BnbConfig, BranchAndBound};
    /// use u_tsp::matrix::CostMatrix;
    ///
    /// let inf = f64::INFINITY;
    /// let m = CostMatrix::from_rows(&[
    ///     vec![inf, 10.0, 15.0, 20.0],
    ///     vec![5.0, inf, 9.0, 10.0],
    ///     vec![6.0, 13.0, inf, 12.0],
    ///     vec![8.0, 8.0, 9.0, inf],
    /// ]).unwrap();
    /// let result = BranchAndBound::run(&m, &BnbConfig::default()).unwrap();
    /// assert!(result.is_optimal());
    /// assert_eq!(result.cost, 35.0);
    /// ```
    pub fn run(matrix: &CostMatrix, config: &BnbConfig) -> TspResult<SolveResult> {
        config.validate()?;
        let n = matrix.size();
        if n < 2 {
            return Err(TspError::InvalidInput { cities: n });
        }

        let started = Instant::now();
        let deadline = config.time_limit().and_then(|limit| started.checked_add(limit));
        let incumbent = Incumbent::seeded(seed_tour(matrix, config, deadline));
        debug!("seeded incumbent for {} cities: cost {}", n, incumbent.cost());

        let Some(root) = SearchState::root(matrix) else {
            info!("a city has no finite edge in or out; no tour exists");
            return Err(TspError::NoFeasibleTour);
        };

        let mut search = Search {
            matrix,
            config,
            started,
            incumbent,
            frontier: Frontier::new(),
            stats: SearchStatistics::default(),
            work: CostMatrix::infinite(n),
        };
        let status = search.run(root);
        let elapsed = started.elapsed();

        let Search {
            incumbent, stats, ..
        } = search;
        let solutions_found = incumbent.improvements();
        let tour = incumbent.into_best();

        match (&tour, status) {
            (None, SolveStatus::Optimal) => {
                info!("search exhausted without a tour after {:?}", elapsed);
                return Err(TspError::NoFeasibleTour);
            }
            (_, SolveStatus::Optimal) => {
                info!("search completed in {:?}\n{}", elapsed, stats);
            }
            (_, SolveStatus::TimedOut) => {
                info!("time limit reached after {:?}\n{}", elapsed, stats);
            }
        }

        Ok(SolveResult {
            cost: tour.as_ref().map_or(f64::INFINITY, Tour::cost),
            tour,
            status,
            elapsed,
            solutions_found,
            stats,
        })
    }
}

/// Seeds the incumbent, sharing the search deadline.
fn seed_tour(matrix: &CostMatrix, config: &BnbConfig, deadline: Option<Instant>) -> Option<Tour> {
    let mut rng = u_numflow::random::create_rng(config.seed.unwrap_or(42));
    let attempts = config.random_attempts;
    match config.seed_heuristic {
        SeedHeuristic::NearestNeighbor => nearest_neighbor_tour(matrix, deadline)
            .or_else(|| random_tour(matrix, attempts, deadline, &mut rng)),
        SeedHeuristic::Random => random_tour(matrix, attempts, deadline, &mut rng),
        SeedHeuristic::None => None,
    }
}

/// Mutable state of one run.
struct Search<'a> {
    matrix: &'a CostMatrix,
    config: &'a BnbConfig,
    started: Instant,
    incumbent: Incumbent,
    frontier: Frontier,
    stats: SearchStatistics,
    work: CostMatrix,
}

impl Search<'_> {
    fn run(&mut self, root: SearchState) -> SolveStatus {
        if self.expand(&root).is_break() {
            return SolveStatus::TimedOut;
        }
        while let Some(pending) = self.frontier.pop() {
            if self.config.pruning && self.incumbent.dominates(pending.lower_bound()) {
                self.stats.states_discarded += 1;
                continue;
            }
            if self.expired() {
                return SolveStatus::TimedOut;
            }
            let state = pending.materialize();
            if self.expand(&state).is_break() {
                return SolveStatus::TimedOut;
            }
        }
        SolveStatus::Optimal
    }

    /// Generates every feasible child of `state`.
    ///
    /// Breaks as soon as the time budget is exhausted.
    fn expand(&mut self, state: &SearchState) -> ControlFlow<()> {
        self.stats.states_expanded += 1;
        trace!(
            "expanding {:?} (bound {}, frontier {})",
            state.path(),
            state.lower_bound(),
            self.frontier.len()
        );
        let terminal_children = state.depth() + 1 == state.num_cities();

        for dest in state.unvisited() {
            if self.expired() {
                return ControlFlow::Break(());
            }
            let Some(lower_bound) = state.bound_into(dest, &mut self.work) else {
                self.stats.infeasible_children += 1;
                continue;
            };
            self.stats.states_created += 1;

            if terminal_children {
                let mut order = state.path().to_vec();
                order.push(dest);
                let tour = Tour::assemble(order, self.matrix);
                if !self.incumbent.try_install(tour) {
                    self.stats.states_pruned += 1;
                }
                continue;
            }

            if self.config.pruning && self.incumbent.dominates(lower_bound) {
                self.stats.states_pruned += 1;
                continue;
            }
            self.frontier.push(PendingState::new(state, dest, lower_bound));
            self.stats.observe_frontier(self.frontier.len());
        }
        ControlFlow::Continue(())
    }

    fn expired(&self) -> bool {
        self.config
            .time_limit()
            .is_some_and(|limit| self.started.elapsed() >= limit)
    }
}
