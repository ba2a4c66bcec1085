//! Dataset file type definitions

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::game::Player;

/// One neighbor or a list of neighbors
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            OneOrMany::One(one) => std::slice::from_ref(one),
            OneOrMany::Many(many) => many,
        };
        items.iter().map(String::as_str)
    }
}

/// Unweighted adjacency entry: `from` is connected to every name in `to`
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: OneOrMany,
}

/// Weighted adjacency entry
#[derive(Debug, Clone, Deserialize)]
pub struct WeightedEdgeSpec {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

/// One node of the flat game-tree table.
///
/// The root has no `parent`. Parents must be declared before their children.
#[derive(Debug, Clone, Deserialize)]
pub struct GameNodeSpec {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub player: Player,
    #[serde(default)]
    pub utility: Option<i64>,
}

/// Endpoints used by the CLI when flags are omitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchDefaults {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

/// Raw contents of a dataset file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetFile {
    /// Alternate spellings mapped to canonical node names
    #[serde(default)]
    pub aliases: HashMap<String, String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,

    #[serde(default)]
    pub weighted_edges: Vec<WeightedEdgeSpec>,

    /// Heuristic estimates toward the dataset's target node
    #[serde(default)]
    pub heuristics: BTreeMap<String, f64>,

    #[serde(default)]
    pub defaults: SearchDefaults,

    #[serde(default)]
    pub game: Vec<GameNodeSpec>,
}
