//! Tracing setup: an append-only log under the XDG state directory, or stderr.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Resolution steps log at debug.
pub const DEFAULT_FILTER: &str = "info,raider=debug";

/// Where records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// `$XDG_STATE_HOME/raider/raider.log`. Creates the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("raider").context("locate XDG directories")?;
    dirs.place_state_file("raider.log")
        .context("create raider state directory")
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}

/// Install the global subscriber for `target`.
pub fn init(target: &LogTarget) -> Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = open_append(path)?;
            tracing::subscriber::set_global_default(subscriber(Mutex::new(file)))
                .context("install tracing subscriber")?;
            tracing::info!(path = %path.display(), "raider logging to file");
        }
        LogTarget::Stderr => {
            tracing::subscriber::set_global_default(subscriber(io::stderr))
                .context("install tracing subscriber")?;
        }
    }
    Ok(())
}

/// Log to [`log_file_path`]. On error nothing is installed, so the caller
/// may still fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    init(&LogTarget::File(path.clone()))?;
    Ok(path)
}

pub fn init_logging_stderr() {
    if let Err(err) = init(&LogTarget::Stderr) {
        eprintln!("raider: {err:#}");
    }
}
