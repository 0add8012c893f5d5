//! Diagnostics for the `sloc-scan` binary.
//!
//! The library only emits `tracing` events. The binary installs a `fmt`
//! subscriber writing to stderr, so stdout carries nothing but the report.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, SlocScanError};

/// Environment variable holding an `EnvFilter` directive, e.g. `sloc_scan=debug`.
pub const LOG_ENV_VAR: &str = "SLOC_SCAN_LOG";

pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;

/// Parse a log level name.
///
/// # Errors
/// Returns `SlocScanError::Config` for an unknown level name.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(SlocScanError::Config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Effective level from `--log-level`, `-v` count and `--quiet`.
///
/// `--quiet` wins and yields `error`. Each `-v` raises the level one step
/// above the base.
#[must_use]
pub fn effective_level(base: Level, verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    let mut level = base;
    let mut steps = verbose;
    while steps > 0 {
        level = match level {
            Level::ERROR => Level::WARN,
            Level::WARN => Level::INFO,
            Level::INFO => Level::DEBUG,
            _ => Level::TRACE,
        };
        steps -= 1;
    }
    level
}

fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()))
}

/// Install the stderr subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(%level, "logging initialized");
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
