//! Tracing subscriber setup

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Split a log file path into its directory and file name, creating the
/// directory when missing. A bare file name resolves to the current directory.
fn prepare_log_file(path: &Path) -> anyhow::Result<(PathBuf, OsString)> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;

    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    Ok((directory.to_path_buf(), file_name.to_os_string()))
}

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr, or as JSON lines to `config.file` when one is set.
/// The returned guard flushes the file writer on drop and must be held until
/// the program exits.
pub fn init(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(path) = &config.file else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(env_filter(config))
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    };

    let (directory, file_name) = prepare_log_file(path)?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&directory, &file_name));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false),
        )
        .with(env_filter(config))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(Some(guard))
}
