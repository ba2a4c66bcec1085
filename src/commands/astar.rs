//! A* search command
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{print_route_human, print_route_records, warn_unknown, RouteReport};
use wayfind_core::dataset::Dataset;
use wayfind_core::error::Result;
use wayfind_core::graph::{AStarSearch, Graph};

/// Execute the astar command with the heuristic layer of `graph`
pub fn execute(cli: &Cli, dataset: &Dataset, graph: &Graph, from: &str, to: &str) -> Result<()> {
    warn_unknown(graph, from);
    warn_unknown(graph, to);

    let result = AStarSearch::new(graph, graph).search(from, to);

    match cli.format {
        OutputFormat::Json => {
            let output = RouteReport {
                start_heuristic: Some(graph.get_heuristic(from)),
                ..RouteReport::new("astar", from, to, &result)
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_route_human(cli, "A*", from, to, &result),
        OutputFormat::Records => print_route_records(dataset, "astar", from, to, &result),
    }

    Ok(())
}
