//! Partial-tour search states and the bound calculation that expands them.
//!
//! # Expansion
//!
//! Extending a partial tour ending at `last` by city `d`:
//!
//! 1. Pay `reduced[last][d]`; an infinite entry rejects the move.
//! 2. Copy the parent's reduced matrix, block row `last` (already left),
//!    column `d` (already entered) and, unless the child completes the tour,
//!    the back-edges `[d][last]` and `[d][start]`.
//! 3. Reduce the copy. The child's bound is the parent's bound plus the edge
//!    plus the reduction.
//!
//! A child is also rejected when a city that still has to be left (or
//! entered) has no finite entry left in its row (or column). For a complete
//! tour this leaves exactly the closing edge, so the bound equals the tour
//! cost.
//!
//! Bounds never decrease from parent to child: reduced entries and reduction
//! totals are non-negative.

use std::sync::Arc;

use crate::matrix::{reduce, reduce_in_place, CostMatrix};

/// A partial tour together with its reduced matrix and lower bound.
///
/// The path always starts at city 0. States are immutable once built; the
/// reduced matrix is shared by reference count with the children that are
/// waiting in the frontier.
#[derive(Debug, Clone)]
pub struct SearchState {
    path: Vec<usize>,
    visited: Vec<bool>,
    reduced: Arc<CostMatrix>,
    lower_bound: f64,
}

impl SearchState {
    /// Builds the root state by reducing the full cost matrix.
    ///
    /// Returns `None` if some city has no finite outgoing or incoming edge,
    /// in which case no tour exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::bnb::SearchState;
    /// use u_tsp::matrix::CostMatrix;
    ///
    /// let inf = f64::INFINITY;
    /// let m = CostMatrix::from_rows(&[
    ///     vec![inf, 10.0, 15.0, 20.0],
    ///     vec![5.0, inf, 9.0, 10.0],
    ///     vec![6.0, 13.0, inf, 12.0],
    ///     vec![8.0, 8.0, 9.0, inf],
    /// ]).unwrap();
    /// let root = SearchState::root(&m).unwrap();
    /// assert_eq!(root.lower_bound(), 35.0);
    /// let child = root.expand(1).unwrap();
    /// assert!(child.lower_bound() >= root.lower_bound());
    /// assert_eq!(child.path(), &[0, 1]);
    /// ```
    pub fn root(matrix: &CostMatrix) -> Option<Self> {
        let n = matrix.size();
        if n == 0 {
            return None;
        }
        let completable =
            (0..n).all(|i| matrix.has_finite_in_row(i) && matrix.has_finite_in_col(i));
        if !completable {
            return None;
        }
        let (reduced, lower_bound) = reduce(matrix);
        let mut visited = vec![false; n];
        visited[0] = true;
        Some(Self {
            path: vec![0],
            visited,
            reduced: Arc::new(reduced),
            lower_bound,
        })
    }

    /// Visited cities in order, starting at city 0.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Last city on the path.
    pub fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Number of cities on the path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Number of cities in the problem.
    pub fn num_cities(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if `city` is on the path.
    pub fn is_visited(&self, city: usize) -> bool {
        self.visited[city]
    }

    /// Returns `true` once every city is on the path.
    pub fn is_terminal(&self) -> bool {
        self.path.len() == self.visited.len()
    }

    /// Lower bound on the cost of any tour completing this path.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// The reduced matrix of this state.
    pub fn reduced_matrix(&self) -> &CostMatrix {
        &self.reduced
    }

    /// Cities not yet on the path, in index order.
    pub fn unvisited(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, v)| !**v)
            .map(|(i, _)| i)
    }

    /// Builds the child that extends the path with `dest`.
    ///
    /// Returns `None` if `dest` is already visited or the move is infeasible.
    pub fn expand(&self, dest: usize) -> Option<SearchState> {
        let mut work = CostMatrix::infinite(self.num_cities());
        let lower_bound = self.bound_into(dest, &mut work)?;
        Some(self.child(dest, lower_bound, Arc::new(work)))
    }

    /// Computes the child's lower bound, leaving its reduced matrix in `work`.
    ///
    /// `work` must have the same size as this state's matrix; its previous
    /// contents are overwritten.
    pub(crate) fn bound_into(&self, dest: usize, work: &mut CostMatrix) -> Option<f64> {
        if self.visited[dest] {
            return None;
        }
        let edge = self.reduced.get(self.last(), dest);
        if !edge.is_finite() {
            return None;
        }
        let terminal = self.path.len() + 1 == self.visited.len();
        work.copy_from(&self.reduced);
        let reduction = block_and_reduce(work, self.last(), dest, terminal);
        if !self.completable_after(work, dest) {
            return None;
        }
        Some(self.lower_bound + edge + reduction)
    }

    /// Every city still to be left has a finite row entry and every city
    /// still to be entered has a finite column entry.
    fn completable_after(&self, work: &CostMatrix, dest: usize) -> bool {
        let open = |c: usize| c != dest && !self.visited[c];
        let rows_ok = (0..self.visited.len())
            .filter(|&c| open(c) || c == dest)
            .all(|c| work.has_finite_in_row(c));
        let cols_ok = (0..self.visited.len())
            .filter(|&c| open(c) || c == self.path[0])
            .all(|c| work.has_finite_in_col(c));
        rows_ok && cols_ok
    }

    fn child(&self, dest: usize, lower_bound: f64, reduced: Arc<CostMatrix>) -> Self {
        let (path, visited) = self.extended(dest);
        Self {
            path,
            visited,
            reduced,
            lower_bound,
        }
    }

    fn extended(&self, dest: usize) -> (Vec<usize>, Vec<bool>) {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(dest);
        let mut visited = self.visited.clone();
        visited[dest] = true;
        (path, visited)
    }
}

/// A child waiting in the frontier.
///
/// Holds the parent's reduced matrix instead of its own; the child's matrix
/// is rebuilt when it is popped, which keeps a pending state at O(n) memory.
#[derive(Debug, Clone)]
pub(crate) struct PendingState {
    path: Vec<usize>,
    visited: Vec<bool>,
    lower_bound: f64,
    parent_reduced: Arc<CostMatrix>,
}

impl PendingState {
    pub(crate) fn new(parent: &SearchState, dest: usize, lower_bound: f64) -> Self {
        let (path, visited) = parent.extended(dest);
        Self {
            path,
            visited,
            lower_bound,
            parent_reduced: Arc::clone(&parent.reduced),
        }
    }

    pub(crate) fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub(crate) fn depth(&self) -> usize {
        self.path.len()
    }

    /// Rebuilds the reduced matrix and returns the full state.
    pub(crate) fn materialize(self) -> SearchState {
        let k = self.path.len();
        let (last, dest) = (self.path[k - 2], self.path[k - 1]);
        let terminal = k == self.visited.len();
        let mut work = (*self.parent_reduced).clone();
        block_and_reduce(&mut work, last, dest, terminal);
        SearchState {
            path: self.path,
            visited: self.visited,
            reduced: Arc::new(work),
            lower_bound: self.lower_bound,
        }
    }
}

fn block_and_reduce(work: &mut CostMatrix, last: usize, dest: usize, terminal: bool) -> f64 {
    work.block_row(last);
    work.block_col(dest);
    if !terminal {
        work.set(dest, last, f64::INFINITY);
        work.set(dest, 0, f64::INFINITY);
    }
    reduce_in_place(work)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const INF: f64 = f64::INFINITY;

    fn example_matrix() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![INF, 10.0, 15.0, 20.0],
            vec![5.0, INF, 9.0, 10.0],
            vec![6.0, 13.0, INF, 12.0],
            vec![8.0, 8.0, 9.0, INF],
        ])
        .expect("valid")
    }

    #[test]
    fn test_root() {
        let root = SearchState::root(&example_matrix()).expect("feasible");
        assert_eq!(root.path(), &[0]);
        assert_eq!(root.depth(), 1);
        assert!(root.is_visited(0));
        assert!(!root.is_terminal());
        assert_eq!(root.lower_bound(), 35.0);
        assert_eq!(root.unvisited().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_root_rejects_isolated_city() {
        let mut m = example_matrix();
        m.block_col(2);
        assert!(SearchState::root(&m).is_none());
    }

    #[test]
    fn test_optimal_path_keeps_bound() {
        // 0→1→3→2→0 costs exactly the root bound.
        let root = SearchState::root(&example_matrix()).expect("feasible");
        let s1 = root.expand(1).expect("feasible");
        let s2 = s1.expand(3).expect("feasible");
        let s3 = s2.expand(2).expect("feasible");
        assert!(s3.is_terminal());
        assert_eq!(s3.path(), &[0, 1, 3, 2]);
        assert!((s3.lower_bound() - 35.0).abs() < 1e-10);
    }

    #[test]
    fn test_terminal_bound_is_tour_cost() {
        let m = example_matrix();
        let root = SearchState::root(&m).expect("feasible");
        let s = root
            .expand(3)
            .and_then(|s| s.expand(1))
            .and_then(|s| s.expand(2))
            .expect("feasible");
        assert!((s.lower_bound() - m.cycle_cost(s.path())).abs() < 1e-10);
    }

    #[test]
    fn test_expand_visited_rejected() {
        let root = SearchState::root(&example_matrix()).expect("feasible");
        assert!(root.expand(0).is_none());
    }

    #[test]
    fn test_expand_infinite_edge_rejected() {
        let mut m = example_matrix();
        m.set(0, 2, INF);
        let root = SearchState::root(&m).expect("feasible");
        assert!(root.expand(2).is_none());
        assert!(root.expand(1).is_some());
    }

    #[test]
    fn test_dead_end_detected_early() {
        // After 0→1 city 2 would have to close the tour through 2→0,
        // which is missing, so the move is rejected before reaching a leaf.
        let m = CostMatrix::from_rows(&[
            vec![INF, 1.0, 1.0],
            vec![1.0, INF, 1.0],
            vec![INF, 1.0, INF],
        ])
        .expect("valid");
        let root = SearchState::root(&m).expect("feasible");
        assert!(root.expand(1).is_none());
        let done = root
            .expand(2)
            .and_then(|s| s.expand(1))
            .expect("0→2→1→0 is feasible");
        assert!((done.lower_bound() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_cities() {
        let m = CostMatrix::from_rows(&[vec![INF, 3.0], vec![4.0, INF]]).expect("valid");
        let root = SearchState::root(&m).expect("feasible");
        let done = root.expand(1).expect("feasible");
        assert!(done.is_terminal());
        assert!((done.lower_bound() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_pending_materialize_matches_expand() {
        let root = SearchState::root(&example_matrix()).expect("feasible");
        let direct = root.expand(2).expect("feasible");
        let mut work = CostMatrix::infinite(4);
        let lb = root.bound_into(2, &mut work).expect("feasible");
        assert_eq!(lb, direct.lower_bound());
        assert_eq!(&work, direct.reduced_matrix());
        let pending = PendingState::new(&root, 2, lb);
        assert_eq!(pending.depth(), 2);
        let rebuilt = pending.materialize();
        assert_eq!(rebuilt.path(), direct.path());
        assert_eq!(rebuilt.reduced_matrix(), direct.reduced_matrix());
        assert_eq!(rebuilt.lower_bound(), direct.lower_bound());
    }

    fn arb_matrix() -> impl Strategy<Value = CostMatrix> {
        (2usize..7).prop_flat_map(|n| {
            prop::collection::vec(
                prop_oneof![5 => (0u32..50).prop_map(f64::from), 1 => Just(INF)],
                n * n,
            )
            .prop_map(move |data| CostMatrix::from_data(n, data).expect("valid"))
        })
    }

    fn walk(state: &SearchState, matrix: &CostMatrix) -> Result<(), TestCaseError> {
        if state.is_terminal() {
            let cost = matrix.cycle_cost(state.path());
            prop_assert!(cost.is_finite());
            prop_assert!((state.lower_bound() - cost).abs() < 1e-6);
            return Ok(());
        }
        for dest in state.unvisited().collect::<Vec<_>>() {
            if let Some(child) = state.expand(dest) {
                prop_assert!(child.lower_bound() >= state.lower_bound());
                walk(&child, matrix)?;
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_bounds_are_monotone_and_exact_at_leaves(m in arb_matrix()) {
            if let Some(root) = SearchState::root(&m) {
                walk(&root, &m)?;
            }
        }
    }
}
