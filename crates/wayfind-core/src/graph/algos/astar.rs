use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::algos::shared::{check_endpoints, extend_path, HeapEntry, Sequence};
use crate::graph::traversal::Heuristic;
use crate::graph::types::{Cost, SearchResult};
use crate::graph::GraphProvider;

/// A* search over the weighted adjacency layer.
///
/// Frontier entries are ordered by `f = g + h`, then by `g`, then by
/// insertion. With a heuristic that is zero everywhere this explores in the
/// same order as uniform-cost search.
pub struct AStarSearch<'a> {
    graph: &'a dyn GraphProvider,
    heuristic: &'a dyn Heuristic,
}

impl<'a> AStarSearch<'a> {
    pub fn new(graph: &'a dyn GraphProvider, heuristic: &'a dyn Heuristic) -> Self {
        Self { graph, heuristic }
    }

    #[tracing::instrument(skip(self))]
    pub fn search(&self, initial: &str, goal: &str) -> SearchResult {
        if let Some(result) = check_endpoints(self.graph, initial, goal) {
            return result;
        }

        let mut seq = Sequence::default();
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
        let mut g_scores: HashMap<String, Cost> = HashMap::new();
        let mut expanded = 0usize;

        g_scores.insert(initial.to_string(), Cost::ZERO);
        heap.push(Reverse(HeapEntry {
            priority: self.heuristic.estimate(initial),
            cost: Cost::ZERO,
            seq: seq.next(),
            node_id: initial.to_string(),
            path: vec![initial.to_string()],
        }));

        while let Some(Reverse(HeapEntry {
            cost: g, node_id, path, ..
        })) = heap.pop()
        {
            // Stale entry: a cheaper route to this node was queued later
            if g_scores.get(&node_id).is_some_and(|best| g > *best) {
                continue;
            }

            if node_id == goal {
                tracing::debug!(expanded, total_cost = %g, "goal reached");
                return SearchResult::found(path, g);
            }
            expanded += 1;

            for edge in self.graph.weighted_neighbors(&node_id) {
                let tentative = g + edge.cost;
                let improves = g_scores
                    .get(&edge.to)
                    .is_none_or(|best| tentative < *best);
                if !improves {
                    continue;
                }

                g_scores.insert(edge.to.clone(), tentative);
                let h = self.heuristic.estimate(&edge.to);
                tracing::trace!(node = %edge.to, g = %tentative, h = %h, "queue");
                heap.push(Reverse(HeapEntry {
                    priority: tentative + h,
                    cost: tentative,
                    seq: seq.next(),
                    node_id: edge.to.clone(),
                    path: extend_path(&path, &edge.to),
                }));
            }
        }

        tracing::debug!(expanded, "frontier exhausted");
        SearchResult::not_found()
    }
}
