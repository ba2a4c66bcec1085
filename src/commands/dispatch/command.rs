//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use wayfind_core::dataset::Dataset;
use wayfind_core::error::Result;
use wayfind_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load the dataset named by `--dataset`, or the builtin sample
    pub fn load_dataset(&self) -> Result<Dataset> {
        let started = Instant::now();
        let dataset = match &self.cli.dataset {
            Some(path) => Dataset::load(path)?,
            None => Dataset::builtin()?,
        };
        trace_time!(started, "load_dataset");
        Ok(dataset)
    }
}

/// Pick the endpoint given on the command line, or the dataset default.
///
/// Command-line names are normalized the same way dataset names are.
pub fn resolve_endpoint(
    dataset: &Dataset,
    flag: &str,
    given: Option<&str>,
    fallback: Option<String>,
) -> Result<String> {
    let name = match given {
        Some(raw) => dataset.normalize_name(raw),
        None => match fallback {
            Some(name) => name,
            None => wayfind_core::bail_usage!(format!(
                "missing --{flag} and the dataset defines no default"
            )),
        },
    };
    if name.is_empty() {
        wayfind_core::bail_usage!(format!("--{flag} must not be empty"));
    }
    Ok(name)
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wayfind {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Classic graph search over city road networks.");
        println!();
        println!("Run `wayfind --help` for usage information.");
        Ok(())
    }
}
