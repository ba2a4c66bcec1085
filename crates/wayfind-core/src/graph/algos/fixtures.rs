//! Small graphs and brute-force oracles shared by the search tests

use crate::graph::model::Graph;
use crate::graph::types::Cost;

/// Five-node diamond with a shortcut:
///
/// ```text
/// A - B - D - E
///  \     /   /
///   - C -----
/// ```
///
/// Insertion order: A-B, A-C, B-D, C-D, D-E, C-E. Also contains an isolated
/// node `Z`.
pub fn diamond() -> Graph {
    let mut graph = Graph::new();
    for (a, b) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E"), ("C", "E")] {
        graph.add_edge(a, b);
    }
    graph.add_node("Z");
    graph
}

/// Weighted graph where the fewest-edge route is not the cheapest one.
///
/// `S-G` costs 10 directly; `S-A-B-G` costs 1 + 2 + 3 = 6 and `S-C-G` costs
/// 4 + 4 = 8. Also contains an unreachable pair `X-Y`.
pub fn weighted() -> Graph {
    let mut graph = Graph::new();
    for (a, b, c) in [
        ("S", "G", 10),
        ("S", "A", 1),
        ("S", "C", 4),
        ("A", "B", 2),
        ("B", "G", 3),
        ("C", "G", 4),
        ("A", "C", 2),
        ("X", "Y", 1),
    ] {
        graph.add_weighted_edge(a, b, Cost::from(c));
    }
    graph
}

/// Every simple path from `from` to `to` over the plain adjacency layer
pub fn all_simple_paths(graph: &Graph, from: &str, to: &str) -> Vec<Vec<String>> {
    let mut paths = Vec::new();
    let mut current = vec![from.to_string()];
    walk(graph, to, &mut current, &mut paths);
    paths
}

fn walk(graph: &Graph, to: &str, current: &mut Vec<String>, paths: &mut Vec<Vec<String>>) {
    let Some(last) = current.last().cloned() else {
        return;
    };
    if last == to {
        paths.push(current.clone());
        return;
    }
    for neighbor in graph.get_neighbors(&last) {
        if current.contains(neighbor) {
            continue;
        }
        current.push(neighbor.clone());
        walk(graph, to, current, paths);
        current.pop();
    }
}

/// Sum of edge costs along a path of the weighted layer
pub fn path_cost(graph: &Graph, path: &[String]) -> Option<Cost> {
    path.windows(2).try_fold(Cost::ZERO, |acc, pair| {
        graph.get_cost(&pair[0], &pair[1]).map(|c| acc + c)
    })
}

/// Cheapest cost over every simple path, by exhaustive enumeration
pub fn brute_force_cost(graph: &Graph, from: &str, to: &str) -> Option<Cost> {
    all_simple_paths(graph, from, to)
        .iter()
        .filter_map(|path| path_cost(graph, path))
        .min()
}

/// Fewest edges over every simple path, by exhaustive enumeration
pub fn brute_force_hops(graph: &Graph, from: &str, to: &str) -> Option<usize> {
    all_simple_paths(graph, from, to)
        .iter()
        .map(|path| path.len() - 1)
        .min()
}

/// Assert that consecutive path entries are adjacent in the plain layer
pub fn assert_connected(graph: &Graph, path: &[String]) {
    for pair in path.windows(2) {
        assert!(
            graph.get_neighbors(&pair[0]).contains(&pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}
