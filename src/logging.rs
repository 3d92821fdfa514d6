//! Tracing subscriber setup.
//!
//! Diagnostics go to a log file because stdout belongs to the terminal UI.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Default log file location in the system temp dir.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("giasmus.log")
}

/// Initialize the global tracing subscriber with file logging and
/// environment-based filtering (`RUST_LOG`, INFO default).
pub fn init_global(log_file_path: &Path) -> Result<()> {
    let log_file = File::create(log_file_path)
        .with_context(|| format!("Failed to create log file {}", log_file_path.display()))?;
    build_subscriber(log_file).init();
    Ok(())
}

/// Build a subscriber writing to the given file.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
