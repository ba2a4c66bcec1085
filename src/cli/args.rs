//! Command argument structures

use clap::Args;

use crate::cli::parse::{parse_strategy_choice, StrategyChoice};

/// Start and goal of a single-goal search.
///
/// Omitted endpoints fall back to the dataset's `[defaults]`.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Start node
    #[arg(long)]
    pub from: Option<String>,

    /// Goal node
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub route: RouteArgs,

    /// Strategy to run (bfs, dfs, both)
    #[arg(long, value_parser = parse_strategy_choice, default_value = "both")]
    pub strategy: StrategyChoice,
}

/// Arguments for the multi command.
#[derive(Args, Debug)]
pub struct MultiArgs {
    /// Start node
    #[arg(long)]
    pub from: Option<String>,

    /// Goal to visit (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub goal: Vec<String>,
}

/// Arguments for the minimax command.
#[derive(Args, Debug)]
pub struct MinimaxArgs {
    /// Print every decision and the tree outline
    #[arg(long)]
    pub trace: bool,
}
