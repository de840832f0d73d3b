//! Display recent log entries from the application.

use anyhow::anyhow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::{log_dir, LOG_FILE_NAME};

const DEFAULT_LINES: usize = 50;

/// Shows recent log entries from the most recent log file.
///
/// # Errors
/// - If the log directory cannot be determined
/// - If log files cannot be read
pub fn handle_logs() -> Result<(), anyhow::Error> {
    let log_dir = log_dir()?;

    if !log_dir.exists() {
        println!("Log directory does not exist yet: {}", log_dir.display());
        println!("Logs will be created when the application runs.");
        return Ok(());
    }

    let log_file = find_latest_log(&log_dir)?;

    let content = fs::read_to_string(&log_file)
        .map_err(|e| anyhow!("Failed to read log file: {e}"))?;

    if content.is_empty() {
        println!("Log file is empty: {}", log_file.display());
        return Ok(());
    }

    let (lines, total) = tail_lines(&content, DEFAULT_LINES);

    if lines.len() < total {
        println!("Showing last {} of {} lines:", lines.len(), total);
    } else {
        println!("Showing all {} lines:", total);
    }
    println!("Full log file at: {}", log_file.display());
    println!();

    for line in lines {
        println!("{line}");
    }

    Ok(())
}

/// Returns at most `count` trailing lines and the total line count.
fn tail_lines(content: &str, count: usize) -> (Vec<&str>, usize) {
    let lines: Vec<&str> = content.lines().collect();
    let total = lines.len();
    let start = total.saturating_sub(count);
    (lines[start..].to_vec(), total)
}

/// Finds the most recently modified log file in the directory.
fn find_latest_log(log_dir: &Path) -> Result<PathBuf, anyhow::Error> {
    let entries = fs::read_dir(log_dir)
        .map_err(|e| anyhow!("Failed to read log directory: {e}"))?;

    entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let is_log = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_FILE_NAME));
            if !is_log {
                return None;
            }
            let modified = fs::metadata(&path).ok()?.modified().ok()?;
            Some((path, modified))
        })
        .max_by_key(|(_, modified)| *modified)
        .map(|(path, _)| path)
        .ok_or_else(|| anyhow!("No log files found in {}", log_dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_lines_truncates() {
        let content = (1..=60).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let (lines, total) = tail_lines(&content, 50);
        assert_eq!(total, 60);
        assert_eq!(lines.len(), 50);
        assert_eq!(lines[0], "11");
        assert_eq!(lines[49], "60");
    }

    #[test]
    fn test_tail_lines_short_file() {
        let (lines, total) = tail_lines("a\nb", 50);
        assert_eq!(total, 2);
        assert_eq!(lines, vec!["a", "b"]);
    }
}
