//! Structured logging for wavetrail using the tracing crate.
//!
//! Configures a rolling file logger that writes to daily-rotated log files.
//! Follows the XDG Base Directory Specification for log file placement.
//! Does not output to terminal to avoid interfering with the TUI.
//! Automatically cleans up old log files, keeping only the 7 most recent days.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::rolling;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Prefix of every log file; the appender adds a `.YYYY-MM-DD` suffix.
pub const LOG_FILE_NAME: &str = "wavetrail.log";

const MAX_LOG_FILES: usize = 7;

/// Environment variable holding a wavetrail-only filter; takes precedence over `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "WAVETRAIL_LOG";

const DEFAULT_FILTER: &str = "info";

/// Global non-blocking guard holder to keep the appender alive for the program lifetime.
static APPENDER_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initializes the logging system with file-based output.
///
/// Sets up a non-blocking rolling file appender that rotates daily.
/// The filter comes from `WAVETRAIL_LOG`, then `RUST_LOG`, then defaults to "info".
///
/// # Errors
/// - If the log directory cannot be determined or created
/// - If logging was already initialized
pub fn init_logging() -> Result<(), anyhow::Error> {
    let log_dir = log_dir()?;
    fs::create_dir_all(&log_dir)?;

    if let Err(e) = cleanup_old_logs(&log_dir) {
        eprintln!("Warning: Failed to cleanup old logs: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    APPENDER_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Logging already initialized"))?;

    let (directive, source) = filter_directive(
        std::env::var(LOG_ENV_VAR).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let (env_filter, directive) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, directive),
        Err(e) => {
            eprintln!("Warning: invalid log filter {directive:?} from {source}: {e}");
            (EnvFilter::new(DEFAULT_FILTER), DEFAULT_FILTER.to_string())
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_ansi(false),
        )
        .init();

    tracing::info!(
        "Logging initialized: filter {:?} (from {}), directory {}",
        directive,
        source,
        log_dir.display()
    );
    Ok(())
}

/// Picks the filter directive and names where it came from.
///
/// Blank values are treated as unset.
fn filter_directive(
    wavetrail_log: Option<String>,
    rust_log: Option<String>,
) -> (String, &'static str) {
    let set = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    if let Some(directive) = set(wavetrail_log) {
        (directive, LOG_ENV_VAR)
    } else if let Some(directive) = set(rust_log) {
        (directive, "RUST_LOG")
    } else {
        (DEFAULT_FILTER.to_string(), "default")
    }
}

/// Determines the log directory, following XDG Base Directory Specification.
///
/// Prefers XDG_STATE_HOME if set, otherwise uses ~/.local/state/wavetrail.
///
/// # Errors
/// - If home directory cannot be determined
pub fn log_dir() -> Result<PathBuf, anyhow::Error> {
    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg_state).join("wavetrail"));
    }
    let home = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home.join(".local/state/wavetrail"))
}

/// Whether `file_name` is a rotated log file (`wavetrail.log.YYYY-MM-DD`).
fn is_rotated_log(file_name: &str) -> bool {
    file_name
        .strip_prefix(LOG_FILE_NAME)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|date| date.matches('-').count() == 2)
}

/// Cleans up old log files, keeping only the most recent ones.
///
/// # Errors
/// - If the log directory cannot be read
fn cleanup_old_logs(log_dir: &Path) -> Result<(), anyhow::Error> {
    let mut log_files: Vec<_> = fs::read_dir(log_dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let file_name = path.file_name()?.to_string_lossy().to_string();
            if !is_rotated_log(&file_name) {
                return None;
            }
            let modified = fs::metadata(&path).ok()?.modified().ok()?;
            Some((path, modified))
        })
        .collect();

    // Newest first
    log_files.sort_by(|a, b| b.1.cmp(&a.1));

    for (path, _) in log_files.iter().skip(MAX_LOG_FILES) {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!("Failed to delete old log file {}: {}", path.display(), e);
        }
    }

    Ok(())
}
