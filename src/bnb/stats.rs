//! Search statistics.

use serde::{Deserialize, Serialize};

/// Counters collected during one branch-and-bound run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Child states built by expansion, including pruned and terminal ones.
    pub states_created: u64,
    /// Children dropped at creation because their bound could not beat
    /// the incumbent.
    pub states_pruned: u64,
    /// Frontier states dropped when popped because the incumbent had since
    /// improved past their bound.
    pub states_discarded: u64,
    /// States whose children were generated.
    pub states_expanded: u64,
    /// Candidate children rejected because the edge was infinite or a
    /// remaining city was left with no finite way in or out.
    pub infeasible_children: u64,
    /// Largest number of states held in the frontier at once.
    pub max_frontier_size: usize,
}

impl SearchStatistics {
    #[inline]
    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.max_frontier_size = self.max_frontier_size.max(len);
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  States Created: {}", self.states_created)?;
        writeln!(f, "  States Pruned: {}", self.states_pruned)?;
        writeln!(f, "  States Discarded: {}", self.states_discarded)?;
        writeln!(f, "  States Expanded: {}", self.states_expanded)?;
        writeln!(f, "  Infeasible Children: {}", self.infeasible_children)?;
        write!(f, "  Max Frontier Size: {}", self.max_frontier_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let s = SearchStatistics::default();
        assert_eq!(s.states_created, 0);
        assert_eq!(s.max_frontier_size, 0);
    }

    #[test]
    fn test_observe_frontier_keeps_max() {
        let mut s = SearchStatistics::default();
        s.observe_frontier(3);
        s.observe_frontier(7);
        s.observe_frontier(2);
        assert_eq!(s.max_frontier_size, 7);
    }

    #[test]
    fn test_display() {
        let s = SearchStatistics {
            states_created: 12,
            states_pruned: 4,
            max_frontier_size: 5,
            ..Default::default()
        };
        let text = s.to_string();
        assert!(text.contains("States Created: 12"));
        assert!(text.contains("States Pruned: 4"));
        assert!(text.contains("Max Frontier Size: 5"));
    }
}
