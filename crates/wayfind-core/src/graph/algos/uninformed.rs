use std::collections::{HashSet, VecDeque};

use crate::graph::algos::shared::{check_endpoints, extend_path};
use crate::graph::types::{Cost, SearchResult, Strategy};
use crate::graph::GraphProvider;

/// Breadth-first and depth-first search over the plain adjacency layer.
///
/// Unweighted results report the number of edges as `total_cost`.
pub struct UninformedSearch<'a> {
    graph: &'a dyn GraphProvider,
}

impl<'a> UninformedSearch<'a> {
    pub fn new(graph: &'a dyn GraphProvider) -> Self {
        Self { graph }
    }

    #[tracing::instrument(skip(self), fields(strategy = %strategy))]
    pub fn search(&self, initial: &str, goal: &str, strategy: Strategy) -> SearchResult {
        if let Some(result) = check_endpoints(self.graph, initial, goal) {
            return result;
        }

        let result = match strategy {
            Strategy::BreadthFirst => self.breadth_first(initial, goal),
            Strategy::DepthFirst => self.depth_first(initial, goal),
        };
        tracing::debug!(
            success = result.success,
            length = result.path_length(),
            "uninformed search finished"
        );
        result
    }

    /// Visited marking happens at enqueue time, and the goal is returned as
    /// soon as it is generated, so the path has the fewest edges possible.
    fn breadth_first(&self, initial: &str, goal: &str) -> SearchResult {
        let mut queue: VecDeque<(String, Vec<String>)> = VecDeque::new();
        let mut visited: HashSet<String> = HashSet::new();

        queue.push_back((initial.to_string(), vec![initial.to_string()]));
        visited.insert(initial.to_string());

        while let Some((current, path)) = queue.pop_front() {
            for neighbor in self.graph.neighbors(&current) {
                if visited.contains(neighbor) {
                    continue;
                }
                let new_path = extend_path(&path, neighbor);
                if neighbor == goal {
                    return found(new_path);
                }
                visited.insert(neighbor.clone());
                queue.push_back((neighbor.clone(), new_path));
            }
        }

        SearchResult::not_found()
    }

    /// Visited marking happens at pop time. Neighbors are pushed in reverse
    /// so the first listed neighbor is explored first; a node may sit on the
    /// stack several times and later copies are discarded when popped.
    fn depth_first(&self, initial: &str, goal: &str) -> SearchResult {
        let mut stack: Vec<(String, Vec<String>)> =
            vec![(initial.to_string(), vec![initial.to_string()])];
        let mut visited: HashSet<String> = HashSet::new();

        while let Some((current, path)) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if current == goal {
                return found(path);
            }
            for neighbor in self.graph.neighbors(&current).iter().rev() {
                if !visited.contains(neighbor) {
                    stack.push((neighbor.clone(), extend_path(&path, neighbor)));
                }
            }
        }

        SearchResult::not_found()
    }
}

fn found(path: Vec<String>) -> SearchResult {
    let edges = path.len().saturating_sub(1);
    SearchResult::found(path, Cost::hops(edges))
}
