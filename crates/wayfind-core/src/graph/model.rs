use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::graph::types::Cost;

/// A `(neighbor, cost)` entry of the weighted adjacency layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedEdge {
    pub to: String,
    pub cost: Cost,
}

/// Undirected city graph with three independent layers.
///
/// - plain adjacency, used by breadth-first and depth-first search
/// - weighted adjacency, used by uniform-cost and A* search
/// - heuristic estimates toward a fixed target, used by A*
///
/// Every layer keeps at most one entry per unordered node pair and stores
/// neighbors in insertion order. The graph is only mutated while it is
/// being built; searches borrow it immutably.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    order: Vec<String>,
    adjacency: HashMap<String, Vec<String>>,
    weighted: HashMap<String, Vec<WeightedEdge>>,
    heuristics: HashMap<String, Cost>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node if it does not exist yet
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.order.push(id.to_string());
            self.adjacency.insert(id.to_string(), Vec::new());
        }
    }

    /// Add an undirected edge, creating missing endpoints
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.add_node(a);
        self.add_node(b);
        push_unique(self.adjacency.get_mut(a), b);
        push_unique(self.adjacency.get_mut(b), a);
    }

    /// Add an undirected weighted edge, creating missing endpoints.
    ///
    /// An existing entry for the pair is kept as is, even when `cost` differs.
    pub fn add_weighted_edge(&mut self, a: &str, b: &str, cost: Cost) {
        self.add_edge(a, b);

        let forward = self.weighted.entry(a.to_string()).or_default();
        if !forward.iter().any(|edge| edge.to == b) {
            forward.push(WeightedEdge {
                to: b.to_string(),
                cost,
            });
        }

        let backward = self.weighted.entry(b.to_string()).or_default();
        if !backward.iter().any(|edge| edge.to == a) {
            backward.push(WeightedEdge {
                to: a.to_string(),
                cost,
            });
        }
    }

    /// Record the heuristic estimate for a node. Does not create the node.
    pub fn set_heuristic(&mut self, id: &str, value: Cost) {
        self.heuristics.insert(id.to_string(), value);
    }

    /// Heuristic estimate for a node, zero when none was recorded
    pub fn get_heuristic(&self, id: &str) -> Cost {
        self.heuristics.get(id).copied().unwrap_or(Cost::ZERO)
    }

    pub fn get_neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get_weighted_neighbors(&self, id: &str) -> &[WeightedEdge] {
        self.weighted.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cost of the edge between two nodes, if they are connected
    pub fn get_cost(&self, a: &str, b: &str) -> Option<Cost> {
        self.get_weighted_neighbors(a)
            .iter()
            .find(|edge| edge.to == b)
            .map(|edge| edge.cost)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// All nodes in the order they were first added
    pub fn nodes(&self) -> &[String] {
        &self.order
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges in the plain adjacency layer
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

fn push_unique(neighbors: Option<&mut Vec<String>>, id: &str) {
    if let Some(neighbors) = neighbors {
        if !neighbors.iter().any(|n| n == id) {
            neighbors.push(id.to_string());
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph:")?;
        let mut names: Vec<&String> = self.order.iter().collect();
        names.sort();
        for name in names {
            write!(f, "  {}", name)?;
            if let Some(h) = self.heuristics.get(name) {
                write!(f, " (h={})", h)?;
            }
            write!(f, " ->")?;
            let weighted = self.get_weighted_neighbors(name);
            if weighted.is_empty() {
                let plain = self.get_neighbors(name);
                if plain.is_empty() {
                    write!(f, " (none)")?;
                }
                for (i, neighbor) in plain.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{}{}", sep, neighbor)?;
                }
            } else {
                for (i, edge) in weighted.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{}{} ({})", sep, edge.to, edge.cost)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
