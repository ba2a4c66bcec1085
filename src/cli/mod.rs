//! CLI argument parsing for wayfind
//!
//! Global flags: --dataset, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{MinimaxArgs, MultiArgs, RouteArgs, SearchArgs};
pub use wayfind_core::format::OutputFormat;
use parse::parse_output_format;

/// Wayfind - classic graph search over city road networks
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Dataset file (TOML); the builtin sample is used when omitted
    #[arg(long, short, global = true, env = "WAYFIND_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `wayfind_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first and/or depth-first search over the road network
    Search(SearchArgs),

    /// Cheapest route by uniform-cost search
    Ucs(RouteArgs),

    /// Greedy tour through several goals
    Multi(MultiArgs),

    /// Cheapest route by A* using the dataset heuristics
    Astar(RouteArgs),

    /// Evaluate the dataset's game tree
    Minimax(MinimaxArgs),

    /// Print the loaded road network
    Graph,
}
