//! City graph model and path-finding operations
//!
//! Provides the graph model and the searches that run over it:
//! - BFS/DFS over the plain adjacency layer
//! - Uniform-cost search (and a greedy multi-goal tour) over weighted edges
//! - A* search over weighted edges guided by a heuristic
//! - Provider and heuristic traits for pluggable data sources

pub mod algos;
pub mod model;
pub mod traversal;
pub mod types;

pub use algos::{AStarSearch, MultiGoalUcs, UniformCostSearch, UninformedSearch};
pub use model::{Graph, WeightedEdge};
pub use traversal::{GraphProvider, Heuristic, ZeroHeuristic};
pub use types::{Cost, MultiGoalResult, SearchResult, Strategy};
