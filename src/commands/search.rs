//! Uninformed search command
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{print_route_human, print_route_records, warn_unknown, RouteReport};
use wayfind_core::dataset::Dataset;
use wayfind_core::error::Result;
use wayfind_core::graph::{Graph, Strategy, UninformedSearch};

/// Execute the search command, running each strategy in order
pub fn execute(
    cli: &Cli,
    dataset: &Dataset,
    graph: &Graph,
    from: &str,
    to: &str,
    strategies: &[Strategy],
) -> Result<()> {
    warn_unknown(graph, from);
    warn_unknown(graph, to);

    let search = UninformedSearch::new(graph);
    let runs: Vec<_> = strategies
        .iter()
        .map(|&strategy| (strategy, search.search(from, to, strategy)))
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let results: Vec<_> = runs
                .iter()
                .map(|(strategy, result)| RouteReport::new(strategy.to_string(), from, to, result))
                .collect();
            let output = json!({
                "from": from,
                "to": to,
                "results": results,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (strategy, result) in &runs {
                print_route_human(cli, strategy.label(), from, to, result);
            }
        }
        OutputFormat::Records => {
            for (strategy, result) in &runs {
                print_route_records(dataset, &format!("search.{strategy}"), from, to, result);
            }
        }
    }

    Ok(())
}
