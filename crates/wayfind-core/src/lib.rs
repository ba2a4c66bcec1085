//! Wayfind Core Library
//!
//! City graph model, classic search algorithms and minimax over game trees.

pub mod dataset;
pub mod error;
pub mod format;
pub mod game;
pub mod graph;
pub mod logging;
