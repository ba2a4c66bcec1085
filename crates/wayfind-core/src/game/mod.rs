//! Adversarial search over explicit game trees
//!
//! Independent of the graph model: callers build a [`GameNode`] tree and
//! [`Minimax`] evaluates it by backward induction.

pub mod minimax;
pub mod tree;

pub use minimax::{Minimax, MinimaxResult};
pub use tree::{GameNode, Player};
