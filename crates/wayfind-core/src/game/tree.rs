use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfindError};

/// The side to move at a decision node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Maximizing player
    #[default]
    #[serde(alias = "MAX")]
    Max,
    /// Minimizing player
    #[serde(alias = "MIN")]
    Min,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Max => write!(f, "MAX"),
            Player::Min => write!(f, "MIN"),
        }
    }
}

/// A node of an explicit game tree.
///
/// A node is terminal iff it carries a utility, and terminal nodes never
/// have children. Trees are assembled once and then only read.
#[derive(Debug)]
pub struct GameNode {
    name: String,
    player: Player,
    children: Vec<GameNode>,
    utility: Option<i64>,
}

impl GameNode {
    /// Create a decision node for `player`
    pub fn decision(name: impl Into<String>, player: Player) -> Self {
        Self {
            name: name.into(),
            player,
            children: Vec::new(),
            utility: None,
        }
    }

    /// Create a terminal node with a fixed utility
    pub fn terminal(name: impl Into<String>, utility: i64) -> Self {
        Self {
            name: name.into(),
            player: Player::default(),
            children: Vec::new(),
            utility: Some(utility),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn children(&self) -> &[GameNode] {
        &self.children
    }

    pub fn utility(&self) -> Option<i64> {
        self.utility
    }

    pub fn is_terminal(&self) -> bool {
        self.utility.is_some()
    }

    /// Append a child. Terminal nodes reject children.
    pub fn add_child(&mut self, child: GameNode) -> Result<()> {
        if self.is_terminal() {
            return Err(WayfindError::invalid_value(
                "game tree",
                format!("terminal node '{}' cannot have children", self.name),
            ));
        }
        self.children.push(child);
        Ok(())
    }

    /// Builder form of [`GameNode::add_child`] for several children at once
    pub fn with_children(mut self, children: impl IntoIterator<Item = GameNode>) -> Result<Self> {
        for child in children {
            self.add_child(child)?;
        }
        Ok(self)
    }

    /// Total number of nodes in this subtree
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Render the subtree as an indented outline.
    ///
    /// Decision nodes print as `├── name [MAX]`, terminals as
    /// `└── name [utility: 3]`, four spaces per level.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(self, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            let indent = "    ".repeat(depth);
            match node.utility {
                Some(utility) => {
                    out.push_str(&format!("{indent}└── {} [utility: {utility}]\n", node.name));
                }
                None => {
                    out.push_str(&format!("{indent}├── {} [{}]\n", node.name, node.player));
                    pending.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
                }
            }
        }
        out
    }
}

impl fmt::Display for GameNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.utility {
            Some(utility) => write!(f, "{} (utility={})", self.name, utility),
            None => write!(
                f,
                "{} ({}'s turn, {} children)",
                self.name,
                self.player,
                self.children.len()
            ),
        }
    }
}

// Deep trees would overflow the stack with the default recursive drop.
impl Drop for GameNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}
