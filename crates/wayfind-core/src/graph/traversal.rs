use std::collections::HashMap;

use crate::graph::model::{Graph, WeightedEdge};
use crate::graph::types::Cost;

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    fn contains(&self, id: &str) -> bool;
    fn neighbors(&self, id: &str) -> &[String];
    fn weighted_neighbors(&self, id: &str) -> &[WeightedEdge];
}

impl GraphProvider for Graph {
    fn contains(&self, id: &str) -> bool {
        self.contains_node(id)
    }

    fn neighbors(&self, id: &str) -> &[String] {
        self.get_neighbors(id)
    }

    fn weighted_neighbors(&self, id: &str) -> &[WeightedEdge] {
        self.get_weighted_neighbors(id)
    }
}

/// Estimated remaining cost from a node to the search target.
///
/// A* returns optimal paths only when the estimate never exceeds the true
/// remaining cost. That property is not checked.
pub trait Heuristic {
    fn estimate(&self, id: &str) -> Cost;
}

impl Heuristic for Graph {
    fn estimate(&self, id: &str) -> Cost {
        self.get_heuristic(id)
    }
}

impl Heuristic for HashMap<String, Cost> {
    fn estimate(&self, id: &str) -> Cost {
        self.get(id).copied().unwrap_or(Cost::ZERO)
    }
}

/// Heuristic that is zero everywhere, reducing A* to uniform-cost search
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _id: &str) -> Cost {
        Cost::ZERO
    }
}
