//! Runtime configuration: where the store lives and how loudly to log.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` in the store path.
///
/// Paths that are not valid UTF-8 are returned unchanged.
#[must_use]
pub fn resolve_store_path(raw: &Path) -> PathBuf {
    match raw.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => raw.to_path_buf(),
    }
}

/// Default filter directive for a `-v` count.
#[must_use]
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the `-v` count.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialize logging")
}
