//! Logging bootstrap shared by every component.
//!
//! Two `fmt` layers write the same records to the console and to an
//! append-only file; `/logs/live` reads that file back. Must be called in
//! `main` before the camera opens or any route is registered. There is no
//! teardown and no rotation: the file grows until the process dies.

use std::{fs::OpenOptions, path::Path, sync::Arc};

use anyhow::{Context, Result};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, prelude::*};

pub(crate) fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_filter(console_filter),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .with_filter(file_filter),
        )
        .try_init()
        .context("logging subscriber already installed")?;
    Ok(())
}
