//! Tracing setup for the wayfind binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log the time elapsed since `$start` at trace level
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
}

/// Filter directive for `--verbose` and `--log-level`.
///
/// A bare level applies to both crates; a directive that names a target
/// (`wayfind_core=trace`) is used as given.
pub fn directive(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => both_crates(level),
        None if verbose => both_crates("debug"),
        None => both_crates("warn"),
    }
}

fn both_crates(level: &str) -> String {
    format!("wayfind={level},wayfind_core={level}")
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG`, then `WAYFIND_LOG`, take precedence over the flags.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("WAYFIND_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive(verbose, log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false);

    if log_json {
        registry.with(layer.json()).try_init()?;
    } else {
        registry.with(layer.compact().with_target(false)).try_init()?;
    }
    Ok(())
}
