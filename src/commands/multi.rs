//! Greedy multi-goal command
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{format_path, print_path_records, records_header, warn_unknown};
use wayfind_core::dataset::Dataset;
use wayfind_core::error::Result;
use wayfind_core::format::record_value;
use wayfind_core::graph::{Graph, MultiGoalResult, MultiGoalUcs};

/// Execute the multi command
pub fn execute(cli: &Cli, dataset: &Dataset, graph: &Graph, from: &str, goals: &[String]) -> Result<()> {
    warn_unknown(graph, from);
    for goal in goals {
        warn_unknown(graph, goal);
    }

    let result = MultiGoalUcs::new(graph).search(from, goals);

    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "algorithm": "multi-ucs",
                "from": from,
                "goals": goals,
                "visit_order": result.visit_order,
                "complete_path": result.complete_path,
                "total_cost": result.total_cost,
                "success": result.success,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(cli, from, goals, &result),
        OutputFormat::Records => output_records(dataset, from, goals, &result),
    }

    Ok(())
}

fn output_human(cli: &Cli, from: &str, goals: &[String], result: &MultiGoalResult) {
    if !result.success {
        println!(
            "Multi-goal: reached {} of {} goals from {from}",
            result.visit_order.len(),
            goals.len()
        );
    }
    println!("Visit order: {}", result.visit_order.join(", "));
    println!("Route: {}", format_path(&result.complete_path));
    if !cli.quiet {
        println!("  cost: {}", result.total_cost);
    }
}

fn output_records(dataset: &Dataset, from: &str, goals: &[String], result: &MultiGoalResult) {
    println!(
        "{}",
        records_header(
            dataset,
            "multi",
            &[
                ("from", record_value(from)),
                ("goals", goals.len().to_string()),
                ("visited", result.visit_order.len().to_string()),
                ("found", result.success.to_string()),
                ("cost", result.total_cost.to_string()),
            ],
        )
    );
    for (i, goal) in result.visit_order.iter().enumerate() {
        println!("G {} {}", i, record_value(goal));
    }
    print_path_records(&result.complete_path);
}
