//! Best-first frontier of pending states.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::state::PendingState;

/// Heap entry. Higher priority compares greater.
#[derive(Debug)]
struct Entry {
    lower_bound: f64,
    depth: usize,
    seq: u64,
    state: PendingState,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Priority order:
        // 1. Ascending lower bound (most promising first)
        // 2. Descending depth (closer to a complete tour)
        // 3. Ascending insertion order (deterministic tie-break)
        other
            .lower_bound
            .total_cmp(&self.lower_bound)
            .then_with(|| self.depth.cmp(&other.depth))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority queue of pending states, most promising first.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, state: PendingState) {
        let entry = Entry {
            lower_bound: state.lower_bound(),
            depth: state.depth(),
            seq: self.next_seq,
            state,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<PendingState> {
        self.heap.pop().map(|e| e.state)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
