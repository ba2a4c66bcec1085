//! Graph command
use std::collections::HashMap;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::records_header;
use wayfind_core::dataset::Dataset;
use wayfind_core::error::Result;
use wayfind_core::format::record_value;
use wayfind_core::graph::Graph;

/// Print the loaded road network
pub fn execute(cli: &Cli, dataset: &Dataset, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let nodes: Vec<_> = graph
                .nodes()
                .iter()
                .map(|node| {
                    json!({
                        "name": node,
                        "neighbors": graph.get_neighbors(node),
                        "weighted": graph.get_weighted_neighbors(node),
                        "heuristic": graph.get_heuristic(node),
                    })
                })
                .collect();
            let output = json!({
                "dataset": dataset.source().display().to_string(),
                "node_count": graph.node_count(),
                "edge_count": graph.edge_count(),
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print!("{graph}");
            if !cli.quiet {
                println!(
                    "{} nodes, {} edges",
                    graph.node_count(),
                    graph.edge_count()
                );
            }
        }
        OutputFormat::Records => output_records(dataset, graph),
    }

    Ok(())
}

/// `V` per node, then `E`/`W` once per undirected edge in node order
fn output_records(dataset: &Dataset, graph: &Graph) {
    println!(
        "{}",
        records_header(
            dataset,
            "graph",
            &[
                ("nodes", graph.node_count().to_string()),
                ("edges", graph.edge_count().to_string()),
            ],
        )
    );

    let position: HashMap<&str, usize> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| (node.as_str(), i))
        .collect();
    let before = |a: &str, b: &str| position.get(a) < position.get(b);

    for node in graph.nodes() {
        println!("V {} h={}", record_value(node), graph.get_heuristic(node));
    }
    for node in graph.nodes() {
        for neighbor in graph.get_neighbors(node) {
            if before(node, neighbor) {
                println!("E {} {}", record_value(node), record_value(neighbor));
            }
        }
    }
    for node in graph.nodes() {
        for edge in graph.get_weighted_neighbors(node) {
            if before(node, &edge.to) {
                println!(
                    "W {} {} cost={}",
                    record_value(node),
                    record_value(&edge.to),
                    edge.cost
                );
            }
        }
    }
}
