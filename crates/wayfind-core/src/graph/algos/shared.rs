use std::cmp::Ordering;

use crate::graph::types::{Cost, SearchResult};
use crate::graph::GraphProvider;

/// Frontier entry for the cost-ordered searches.
///
/// Ordered by `(priority, cost, seq)`. For uniform-cost search the priority is
/// the accumulated cost itself; for A* it is `g + h`. `seq` is unique per
/// search, so no two entries compare equal and equal-cost entries pop in
/// insertion order. Wrap in `Reverse` to use with `BinaryHeap` as a min-heap.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub priority: Cost,
    pub cost: Cost,
    pub seq: u64,
    pub node_id: String,
    pub path: Vec<String>,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Monotonic tie-break counter for frontier entries
#[derive(Debug, Default)]
pub struct Sequence(u64);

impl Sequence {
    pub fn next(&mut self) -> u64 {
        let current = self.0;
        self.0 += 1;
        current
    }
}

/// Resolve the cases every pairwise search handles before touching a frontier.
///
/// Returns a failed result when either endpoint is missing from the graph and
/// a single-node result when start and goal coincide.
pub fn check_endpoints(
    provider: &dyn GraphProvider,
    initial: &str,
    goal: &str,
) -> Option<SearchResult> {
    if !provider.contains(initial) {
        tracing::debug!(node = %initial, "start not in graph");
        return Some(SearchResult::not_found());
    }
    if !provider.contains(goal) {
        tracing::debug!(node = %goal, "goal not in graph");
        return Some(SearchResult::not_found());
    }
    if initial == goal {
        return Some(SearchResult::trivial(initial));
    }
    None
}

/// Copy of `path` with `next` appended
pub fn extend_path(path: &[String], next: &str) -> Vec<String> {
    let mut extended = Vec::with_capacity(path.len() + 1);
    extended.extend_from_slice(path);
    extended.push(next.to_string());
    extended
}
