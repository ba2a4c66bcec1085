use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfindError};

/// Cost of traversing an edge, or an accumulated path cost.
///
/// Always finite and non-negative, which makes the ordering total. Sums
/// saturate at `f64::MAX` instead of overflowing to infinity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    /// Create a cost, rejecting negative and non-finite values
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            crate::bail_invalid!("cost", value);
        }
        // Adding +0.0 folds -0.0 into 0.0 so equal costs compare equal.
        Ok(Cost(value + 0.0))
    }

    /// Cost of a path of `edges` unit-cost edges
    pub fn hops(edges: usize) -> Self {
        Cost(edges as f64)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost((self.0 + other.0).min(f64::MAX))
    }
}

impl std::ops::AddAssign for Cost {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl From<u32> for Cost {
    fn from(value: u32) -> Self {
        Cost(f64::from(value))
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Outcome of a single start/goal search.
///
/// On failure `path` is empty and `total_cost` is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub path: Vec<String>,
    pub total_cost: Cost,
    pub success: bool,
}

impl SearchResult {
    pub fn found(path: Vec<String>, total_cost: Cost) -> Self {
        Self {
            path,
            total_cost,
            success: true,
        }
    }

    pub fn not_found() -> Self {
        Self {
            path: Vec::new(),
            total_cost: Cost::ZERO,
            success: false,
        }
    }

    /// Result for a search whose start is already the goal
    pub fn trivial(start: &str) -> Self {
        Self::found(vec![start.to_string()], Cost::ZERO)
    }

    /// Number of edges on the path
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Outcome of a greedy multi-goal tour.
///
/// On failure the route accumulated so far is preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiGoalResult {
    pub complete_path: Vec<String>,
    pub total_cost: Cost,
    pub visit_order: Vec<String>,
    pub success: bool,
}

/// Uninformed search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
}

pub const STRATEGY_NAMES: &str = "bfs, dfs";

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BreadthFirst, Strategy::DepthFirst];

    /// Short uppercase label used in human output
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
        }
    }
}

impl FromStr for Strategy {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            other => crate::bail_unsupported!("strategy", other, STRATEGY_NAMES),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "bfs"),
            Strategy::DepthFirst => write!(f, "dfs"),
        }
    }
}
