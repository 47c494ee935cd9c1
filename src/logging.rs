//! Tracing subscriber setup

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log events go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Append to a file; the terminal is busy with the game
    File(&'a Path),
    Stderr,
    /// No subscriber at all
    Off,
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_level` when set.
pub fn init(target: LogTarget<'_>, default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("Invalid log level {default_level:?}"))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))
}
