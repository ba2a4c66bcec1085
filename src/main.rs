//! Wayfind - classic graph search over city road networks
//!
//! Runs breadth-first, depth-first, uniform-cost, A* and minimax searches
//! against a TOML dataset and prints the result for people or scripts.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use wayfind_core::error::{ExitCode as WayfindExitCode, WayfindError};
use wayfind_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` are not errors; everything else clap
        // rejects is a usage error, reported as JSON when asked for.
        Err(err) if err.use_stderr() && argv_requests_json() => {
            let error = WayfindError::UsageError(err.to_string());
            eprintln!("{}", error.to_json());
            return ExitCode::from(error.exit_code() as u8);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(WayfindExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {e}");
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
