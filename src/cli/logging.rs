//! Logging initialization

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Initialize logging based on debug flag
/// Returns the log file path if debug logging is enabled
pub fn init_logging(debug: bool) -> Result<Option<PathBuf>> {
    if !debug {
        // No logging by default (silent operation)
        return Ok(None);
    }

    // Named temp file so the log outlives this call
    let log_path = tempfile::Builder::new()
        .prefix("runner-options-")
        .suffix(".log")
        .tempfile()
        .and_then(|f| f.keep().map_err(|e| e.error))
        .map(|(_, path)| path)
        .unwrap_or_else(|_| {
            std::env::temp_dir().join(format!("runner-options-{}.log", std::process::id()))
        });

    let file = std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    // Write to a file so command output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(Some(log_path))
}
