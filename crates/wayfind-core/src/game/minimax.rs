use serde::Serialize;

use crate::error::{Result, WayfindError};
use crate::game::tree::{GameNode, Player};

/// Outcome of a minimax evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimaxResult {
    /// Backward-induced value of the root
    pub best_value: i64,
    /// Node names from the root to the terminal realizing `best_value`
    pub best_path: Vec<String>,
    pub nodes_evaluated: usize,
    /// Per-node decisions, collected only in verbose mode
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<String>,
    /// Outline of the whole tree, rendered only in verbose mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_tree: Option<String>,
}

/// One pending node of the explicit evaluation stack
struct Frame<'t> {
    node: &'t GameNode,
    depth: usize,
    next_child: usize,
    best: Option<(i64, Vec<String>)>,
}

impl<'t> Frame<'t> {
    fn new(node: &'t GameNode, depth: usize) -> Self {
        Self {
            node,
            depth,
            next_child: 0,
            best: None,
        }
    }

    /// Fold a child's value in. Only a strictly better value replaces the
    /// current best, so the first child wins ties.
    fn offer(&mut self, value: i64, path: Vec<String>) {
        let better = match &self.best {
            None => true,
            Some((best, _)) => match self.node.player() {
                Player::Max => value > *best,
                Player::Min => value < *best,
            },
        };
        if better {
            self.best = Some((value, path));
        }
    }
}

/// Minimax evaluation of an explicit game tree by backward induction.
///
/// Children are evaluated in declaration order. The evaluation uses an
/// explicit stack, so tree depth is limited by memory rather than by the
/// call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `root` and return its value with the path to the leaf that
    /// realizes it. With `verbose` every step is recorded in
    /// [`MinimaxResult::trace`] and logged at debug level, and the tree
    /// outline is rendered into [`MinimaxResult::decision_tree`].
    ///
    /// A decision node without children has no value and is rejected.
    #[tracing::instrument(skip(self, root), fields(root = %root.name()))]
    pub fn search(&self, root: &GameNode, verbose: bool) -> Result<MinimaxResult> {
        let mut trace = Vec::new();
        let mut log = |line: String| {
            if verbose {
                tracing::debug!("{}", line);
                trace.push(line);
            }
        };

        let mut nodes_evaluated = 1usize;
        let mut path: Vec<String> = vec![root.name().to_string()];
        let mut stack: Vec<Frame<'_>> = vec![Frame::new(root, 0)];
        let mut returned: Option<(i64, Vec<String>)> = None;

        if !root.is_terminal() {
            log(format!("{}: {}", root.player(), root.name()));
        }

        let (best_value, best_path) = loop {
            let Some(frame) = stack.last_mut() else {
                return Err(WayfindError::Other(
                    "minimax stack emptied before the root was resolved".to_string(),
                ));
            };
            let node = frame.node;
            let indent = "  ".repeat(frame.depth);

            if let Some((value, leaf_path)) = returned.take() {
                frame.offer(value, leaf_path);
            }

            let resolved = if let Some(utility) = node.utility() {
                log(format!("{indent}Terminal: {} = {utility}", node.name()));
                (utility, path.clone())
            } else if let Some(child) = node.children().get(frame.next_child) {
                frame.next_child += 1;
                let depth = frame.depth + 1;
                nodes_evaluated += 1;
                path.push(child.name().to_string());
                if !child.is_terminal() {
                    log(format!(
                        "{}{}: {}",
                        "  ".repeat(depth),
                        child.player(),
                        child.name()
                    ));
                }
                stack.push(Frame::new(child, depth));
                continue;
            } else {
                let Some((value, leaf_path)) = frame.best.take() else {
                    return Err(WayfindError::invalid_value(
                        "game tree",
                        format!("decision node '{}' has no children", node.name()),
                    ));
                };
                let leaf = leaf_path.last().map(String::as_str).unwrap_or("?");
                log(format!(
                    "{indent}   -> {} chooses {value} (path to {leaf})",
                    node.player()
                ));
                (value, leaf_path)
            };

            stack.pop();
            path.pop();
            if stack.is_empty() {
                break resolved;
            }
            returned = Some(resolved);
        };

        tracing::debug!(best_value, nodes_evaluated, "minimax finished");

        Ok(MinimaxResult {
            best_value,
            best_path,
            nodes_evaluated,
            trace,
            decision_tree: verbose.then(|| root.render()),
        })
    }
}
