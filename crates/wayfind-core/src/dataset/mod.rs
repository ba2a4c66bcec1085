//! TOML datasets: city graph, heuristics, game tree and search defaults

mod types;

pub use types::{DatasetFile, EdgeSpec, GameNodeSpec, OneOrMany, SearchDefaults, WeightedEdgeSpec};

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WayfindError};
use crate::game::GameNode;
use crate::graph::{Cost, Graph};

/// Label used for the dataset compiled into the binary
pub const BUILTIN_SOURCE: &str = "<builtin>";

const BUILTIN_DATASET: &str = include_str!("../../data/sample.toml");

/// A parsed dataset together with the file it came from
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    file: DatasetFile,
}

impl Dataset {
    /// Load a dataset from a TOML file
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WayfindError::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// The sample dataset shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_DATASET, Path::new(BUILTIN_SOURCE))
    }

    /// Parse dataset text; `source` is only used in error messages
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        let file: DatasetFile = match toml::from_str(content) {
            Ok(file) => file,
            Err(e) => crate::bail_dataset!(source, e),
        };
        tracing::debug!(
            source = %source.display(),
            edges = file.edges.len(),
            weighted_edges = file.weighted_edges.len(),
            game_nodes = file.game.len(),
            "parsed dataset"
        );
        Ok(Self {
            source: source.to_path_buf(),
            file,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn file(&self) -> &DatasetFile {
        &self.file
    }

    /// Trim surrounding whitespace and resolve aliases.
    ///
    /// Aliases resolve a single step; an alias target is not looked up again.
    pub fn normalize_name(&self, name: &str) -> String {
        let trimmed = name.trim();
        match self.file.aliases.get(trimmed) {
            Some(canonical) => canonical.trim().to_string(),
            None => trimmed.to_string(),
        }
    }

    /// Build the city graph.
    ///
    /// Endpoints are normalized first. Entries with an empty endpoint or with
    /// both endpoints equal are skipped.
    pub fn build_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        let mut skipped = 0usize;

        for edge in &self.file.edges {
            let from = self.normalize_name(&edge.from);
            for to in edge.to.iter() {
                let to = self.normalize_name(to);
                if from.is_empty() || to.is_empty() || from == to {
                    skipped += 1;
                    continue;
                }
                graph.add_edge(&from, &to);
            }
        }

        for edge in &self.file.weighted_edges {
            let from = self.normalize_name(&edge.from);
            let to = self.normalize_name(&edge.to);
            if from.is_empty() || to.is_empty() || from == to {
                skipped += 1;
                continue;
            }
            let Ok(cost) = Cost::new(edge.cost) else {
                crate::bail_dataset!(
                    &self.source,
                    format!("edge {from} - {to} has invalid cost {}", edge.cost)
                );
            };
            graph.add_weighted_edge(&from, &to, cost);
        }

        for (name, value) in &self.file.heuristics {
            let name = self.normalize_name(name);
            if name.is_empty() {
                skipped += 1;
                continue;
            }
            let Ok(estimate) = Cost::new(*value) else {
                crate::bail_dataset!(
                    &self.source,
                    format!("heuristic for {name} is invalid: {value}")
                );
            };
            graph.set_heuristic(&name, estimate);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            skipped,
            "built graph"
        );
        Ok(graph)
    }

    /// Assemble the game tree, or `None` when the dataset declares no game
    pub fn game_tree(&self) -> Result<Option<GameNode>> {
        let specs = &self.file.game;
        if specs.is_empty() {
            return Ok(None);
        }

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); specs.len()];
        let mut root = None;

        for (i, spec) in specs.iter().enumerate() {
            let name = spec.name.trim();
            if name.is_empty() {
                crate::bail_dataset!(&self.source, format!("game node #{} has no name", i + 1));
            }
            if index.insert(name, i).is_some() {
                crate::bail_dataset!(&self.source, format!("duplicate game node '{name}'"));
            }
            match spec.parent.as_deref().map(str::trim) {
                None => {
                    if let Some(first) = root {
                        let first: &GameNodeSpec = &specs[first];
                        crate::bail_dataset!(
                            &self.source,
                            format!("game tree has several roots: '{}' and '{name}'", first.name.trim())
                        );
                    }
                    root = Some(i);
                }
                Some(parent) => {
                    // Parents must come first, which also rules out cycles.
                    let Some(&p) = index.get(parent).filter(|&&p| p != i) else {
                        crate::bail_dataset!(
                            &self.source,
                            format!("game node '{name}' has unknown parent '{parent}'")
                        );
                    };
                    if specs[p].utility.is_some() {
                        crate::bail_dataset!(
                            &self.source,
                            format!("terminal game node '{parent}' cannot have child '{name}'")
                        );
                    }
                    children[p].push(i);
                }
            }
        }

        let Some(root) = root else {
            crate::bail_dataset!(&self.source, "game tree has no root");
        };

        // Children always follow their parent, so a reverse sweep builds
        // every subtree before the node that owns it.
        let mut built: Vec<Option<GameNode>> = specs.iter().map(|_| None).collect();
        for i in (0..specs.len()).rev() {
            let spec = &specs[i];
            let name = spec.name.trim();
            let mut node = match spec.utility {
                Some(utility) => GameNode::terminal(name, utility),
                None => GameNode::decision(name, spec.player),
            };
            for &c in &children[i] {
                let Some(child) = built[c].take() else {
                    crate::bail_dataset!(&self.source, format!("game node '{name}' is malformed"));
                };
                node.add_child(child)
                    .map_err(|e| WayfindError::invalid_dataset(&self.source, e))?;
            }
            built[i] = Some(node);
        }

        let tree = built[root].take();
        if let Some(tree) = &tree {
            tracing::debug!(root = tree.name(), nodes = tree.size(), "built game tree");
        }
        Ok(tree)
    }

    /// Default start node, normalized
    pub fn default_start(&self) -> Option<String> {
        self.file
            .defaults
            .start
            .as_deref()
            .map(|name| self.normalize_name(name))
            .filter(|name| !name.is_empty())
    }

    /// Default goal node, normalized
    pub fn default_goal(&self) -> Option<String> {
        self.file
            .defaults
            .goal
            .as_deref()
            .map(|name| self.normalize_name(name))
            .filter(|name| !name.is_empty())
    }

    /// Default goal list for multi-goal search, normalized
    pub fn default_goals(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.file
            .defaults
            .goals
            .iter()
            .map(|name| self.normalize_name(name))
            .filter(|name| !name.is_empty() && seen.insert(name.clone()))
            .collect()
    }
}
