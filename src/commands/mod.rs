//! CLI commands for wayfind

pub mod astar;
pub mod dispatch;
pub mod graph;
pub mod helpers;
pub mod minimax;
pub mod multi;
pub mod search;
pub mod ucs;
