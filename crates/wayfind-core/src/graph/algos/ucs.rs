use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::algos::shared::{check_endpoints, extend_path, HeapEntry, Sequence};
use crate::graph::types::{Cost, MultiGoalResult, SearchResult};
use crate::graph::GraphProvider;

/// Uniform-cost (Dijkstra) search over the weighted adjacency layer
pub struct UniformCostSearch<'a> {
    graph: &'a dyn GraphProvider,
}

impl<'a> UniformCostSearch<'a> {
    pub fn new(graph: &'a dyn GraphProvider) -> Self {
        Self { graph }
    }

    /// Find the cheapest path from `initial` to `goal`.
    ///
    /// The goal is accepted the first time it is popped, which is optimal as
    /// long as edge costs are non-negative.
    #[tracing::instrument(skip(self))]
    pub fn search(&self, initial: &str, goal: &str) -> SearchResult {
        if let Some(result) = check_endpoints(self.graph, initial, goal) {
            return result;
        }

        let mut seq = Sequence::default();
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
        let mut visited: HashMap<String, Cost> = HashMap::new();
        let mut expanded = 0usize;

        heap.push(Reverse(HeapEntry {
            priority: Cost::ZERO,
            cost: Cost::ZERO,
            seq: seq.next(),
            node_id: initial.to_string(),
            path: vec![initial.to_string()],
        }));

        while let Some(Reverse(HeapEntry {
            cost, node_id, path, ..
        })) = heap.pop()
        {
            // Stale entry: node already finalized at an equal or lower cost
            if visited.get(&node_id).is_some_and(|best| *best <= cost) {
                continue;
            }
            visited.insert(node_id.clone(), cost);

            if node_id == goal {
                tracing::debug!(expanded, total_cost = %cost, "goal reached");
                return SearchResult::found(path, cost);
            }
            expanded += 1;

            for edge in self.graph.weighted_neighbors(&node_id) {
                if visited.contains_key(&edge.to) {
                    continue;
                }
                let new_cost = cost + edge.cost;
                heap.push(Reverse(HeapEntry {
                    priority: new_cost,
                    cost: new_cost,
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

/// Greedy tour through several goals using repeated uniform-cost searches.
///
/// Each round moves to the cheapest still-unvisited goal from the current
/// location. Visit order is never reconsidered, so the tour is not
/// guaranteed to be the cheapest overall.
pub struct MultiGoalUcs<'a> {
    ucs: UniformCostSearch<'a>,
}

impl<'a> MultiGoalUcs<'a> {
    pub fn new(graph: &'a dyn GraphProvider) -> Self {
        Self {
            ucs: UniformCostSearch::new(graph),
        }
    }

    /// Visit every goal starting from `initial`.
    ///
    /// Duplicate goals are ignored. Among equally cheap goals the one listed
    /// first wins. When no remaining goal is reachable the route built so far
    /// is returned with `success == false`.
    #[tracing::instrument(skip(self, goals), fields(goals = goals.len()))]
    pub fn search(&self, initial: &str, goals: &[String]) -> MultiGoalResult {
        let mut seen = HashSet::new();
        let mut unvisited: Vec<&str> = goals
            .iter()
            .map(String::as_str)
            .filter(|goal| seen.insert(*goal))
            .collect();

        let mut current = initial.to_string();
        let mut complete_path = vec![initial.to_string()];
        let mut total_cost = Cost::ZERO;
        let mut visit_order = Vec::new();

        while !unvisited.is_empty() {
            let mut best: Option<(usize, SearchResult)> = None;
            for (idx, goal) in unvisited.iter().enumerate() {
                let result = self.ucs.search(&current, goal);
                if !result.success {
                    continue;
                }
                let improves = best
                    .as_ref()
                    .is_none_or(|(_, leader)| result.total_cost < leader.total_cost);
                if improves {
                    best = Some((idx, result));
                }
            }

            let Some((idx, leg)) = best else {
                tracing::debug!(
                    remaining = unvisited.len(),
                    at = %current,
                    "no remaining goal reachable"
                );
                return MultiGoalResult {
                    complete_path,
                    total_cost,
                    visit_order,
                    success: false,
                };
            };

            let goal = unvisited.remove(idx).to_string();
            tracing::debug!(goal = %goal, leg_cost = %leg.total_cost, "committed to goal");
            complete_path.extend(leg.path.into_iter().skip(1));
            total_cost += leg.total_cost;
            visit_order.push(goal.clone());
            current = goal;
        }

        MultiGoalResult {
            complete_path,
            total_cost,
            visit_order,
            success: true,
        }
    }
}
