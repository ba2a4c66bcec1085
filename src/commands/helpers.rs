//! Output helpers shared across commands

use serde::Serialize;

use crate::cli::Cli;
use wayfind_core::dataset::Dataset;
use wayfind_core::format::record_value;
use wayfind_core::graph::{Cost, Graph, SearchResult};

/// Join a path as `A -> B -> C`
pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// Build the `H` line that opens a records block
pub fn records_header(dataset: &Dataset, mode: &str, fields: &[(&str, String)]) -> String {
    let source = dataset.source().display().to_string();
    let mut line = format!(
        "H wayfind=1 records=1 dataset={} mode={}",
        record_value(&source),
        mode
    );
    for (key, value) in fields {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(value);
    }
    line
}

/// One `N <index> <name>` line per path node
pub fn print_path_records(path: &[String]) {
    for (i, node) in path.iter().enumerate() {
        println!("N {} {}", i, record_value(node));
    }
}

/// Log a warning when an endpoint is not part of the graph.
///
/// The search still runs and reports no path.
pub fn warn_unknown(graph: &Graph, name: &str) {
    if !graph.contains_node(name) {
        tracing::warn!(node = name, "node is not in the graph");
    }
}

pub fn print_route_human(cli: &Cli, label: &str, from: &str, to: &str, result: &SearchResult) {
    if !result.success {
        println!("{label}: no path from {from} to {to}");
        return;
    }
    println!("{label}: {}", format_path(&result.path));
    if !cli.quiet {
        println!(
            "  cost: {} ({} edges)",
            result.total_cost,
            result.path_length()
        );
    }
}

pub fn print_route_records(
    dataset: &Dataset,
    mode: &str,
    from: &str,
    to: &str,
    result: &SearchResult,
) {
    println!(
        "{}",
        records_header(
            dataset,
            mode,
            &[
                ("from", record_value(from)),
                ("to", record_value(to)),
                ("found", result.success.to_string()),
                ("cost", result.total_cost.to_string()),
                ("length", result.path_length().to_string()),
            ],
        )
    );
    print_path_records(&result.path);
}

/// JSON shape of a single-route search
#[derive(Debug, Serialize)]
pub struct RouteReport<'a> {
    pub algorithm: String,
    pub from: &'a str,
    pub to: &'a str,
    pub path: &'a [String],
    pub total_cost: Cost,
    pub path_length: usize,
    pub success: bool,
    /// Estimate at the start node; only reported by A*
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_heuristic: Option<Cost>,
}

impl<'a> RouteReport<'a> {
    pub fn new(
        algorithm: impl Into<String>,
        from: &'a str,
        to: &'a str,
        result: &'a SearchResult,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            from,
            to,
            path: &result.path,
            total_cost: result.total_cost,
            path_length: result.path_length(),
            success: result.success,
            start_heuristic: None,
        }
    }
}
