//! Uniform-cost search command
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{print_route_human, print_route_records, warn_unknown, RouteReport};
use wayfind_core::dataset::Dataset;
use wayfind_core::error::Result;
use wayfind_core::graph::{Graph, UniformCostSearch};

pub fn execute(cli: &Cli, dataset: &Dataset, graph: &Graph, from: &str, to: &str) -> Result<()> {
    warn_unknown(graph, from);
    warn_unknown(graph, to);

    let result = UniformCostSearch::new(graph).search(from, to);

    match cli.format {
        OutputFormat::Json => {
            let output = RouteReport::new("ucs", from, to, &result);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_route_human(cli, "UCS", from, to, &result),
        OutputFormat::Records => print_route_records(dataset, "ucs", from, to, &result),
    }

    Ok(())
}
