//! Command dispatch logic for wayfind

use std::time::Instant;

use crate::cli::Cli;
use tracing::debug;
use wayfind_core::error::Result;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?start.elapsed(), "dispatch");
    result
}
