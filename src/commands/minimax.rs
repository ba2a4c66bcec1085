//! Minimax command
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{format_path, print_path_records, records_header};
use wayfind_core::dataset::Dataset;
use wayfind_core::error::{Result, WayfindError};
use wayfind_core::format::record_value;
use wayfind_core::game::{Minimax, MinimaxResult};

/// Execute the minimax command over the dataset's game tree
pub fn execute(cli: &Cli, dataset: &Dataset, trace: bool) -> Result<()> {
    let Some(tree) = dataset.game_tree()? else {
        return Err(WayfindError::not_found(
            "game tree",
            dataset.source().display(),
        ));
    };

    let result = Minimax::new().search(&tree, trace)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => output_human(cli, &result),
        OutputFormat::Records => output_records(dataset, &result),
    }

    Ok(())
}

fn output_human(cli: &Cli, result: &MinimaxResult) {
    if let Some(outline) = &result.decision_tree {
        println!("Decision tree:");
        print!("{outline}");
        println!();
    }
    if !result.trace.is_empty() {
        println!("Evaluation:");
        for line in &result.trace {
            println!("{line}");
        }
        println!();
    }

    println!("Best value: {}", result.best_value);
    println!("Best path: {}", format_path(&result.best_path));
    if !cli.quiet {
        println!("  nodes evaluated: {}", result.nodes_evaluated);
    }
}

fn output_records(dataset: &Dataset, result: &MinimaxResult) {
    println!(
        "{}",
        records_header(
            dataset,
            "minimax",
            &[
                ("value", result.best_value.to_string()),
                ("nodes", result.nodes_evaluated.to_string()),
                ("length", result.best_path.len().saturating_sub(1).to_string()),
            ],
        )
    );
    print_path_records(&result.best_path);
    for line in &result.trace {
        println!("T {}", record_value(line));
    }
}
