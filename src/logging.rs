//! Logging setup
//!
//! `env_logger` behind the `log` facade. `RUST_LOG` overrides the default filter.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Initialize the global logger
///
/// Output goes to `log_file` when given (appending), otherwise to stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(log_file: Option<&Path>, default_filter: &str) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Cannot open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
    Ok(())
}
