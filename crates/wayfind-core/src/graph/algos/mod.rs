//! Graph search algorithm implementations
//!
//! - `uninformed`: Breadth-first and depth-first search
//! - `ucs`: Uniform-cost search and the greedy multi-goal tour
//! - `astar`: A* search with a pluggable heuristic
//! - `shared`: Frontier entry and endpoint checks used by all of the above

pub mod astar;
pub mod shared;
pub mod ucs;
pub mod uninformed;

#[cfg(test)]
pub(crate) mod fixtures;

pub use astar::AStarSearch;
pub use shared::{check_endpoints, HeapEntry};
pub use ucs::{MultiGoalUcs, UniformCostSearch};
pub use uninformed::UninformedSearch;
