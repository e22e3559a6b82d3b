//! Shared components for CLI commands
//!
//! Common types, utilities, and functions used across the command
//! implementations.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::{Error, Result};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of measurement files discovered
    pub files_found: usize,
    /// Number of files that contributed result rows
    pub files_processed: usize,
    /// Number of result rows produced
    pub rows_produced: usize,
    /// Tolerance checks that passed
    pub checks_passed: usize,
    /// Tolerance checks that failed
    pub checks_failed: usize,
    /// Files skipped, with the reason each was skipped
    pub skipped: Vec<(String, String)>,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Path the results file was written to, if any
    pub output_path: Option<PathBuf>,
}

impl RunStats {
    /// Record a skipped file with its reason
    pub fn skip(&mut self, file: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push((file.into(), reason.into()));
    }

    /// True when every performed check passed
    pub fn all_checks_passed(&self) -> bool {
        self.checks_failed == 0
    }
}

/// Set up structured logging with the given level
///
/// `RUST_LOG` takes precedence over the CLI-derived level when set.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bench_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Discover measurement files (*.csv and *.txt) in a flat directory
///
/// Returns paths sorted by name for a deterministic processing order.
pub fn discover_measurement_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for extension in ["csv", "txt"] {
        let pattern = dir.join(format!("*.{extension}"));
        let pattern = pattern.to_string_lossy();
        let entries = glob::glob(&pattern)
            .map_err(|e| Error::configuration(format!("Invalid glob pattern '{pattern}': {e}")))?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => debug!("Skipping unreadable directory entry: {}", e),
            }
        }
    }

    files.sort();

    debug!("Discovered {} measurement file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Discover only the text logs (*.txt) in a flat directory
pub fn discover_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = discover_measurement_files(dir)?;
    files.retain(|path| crate::constants::is_input_file(path));
    Ok(files)
}

/// Check if an error is critical enough to stop processing
///
/// Per-file errors (I/O, CSV shape, missing type selection) are
/// recoverable: the batch skips the file and continues.
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. }
            | Error::ProcessingInterrupted { .. }
            | Error::ResultsWriting { .. }
    )
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Display name of a path: the bare file name where possible
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_stats_default() {
        let stats = RunStats::default();
        assert_eq!(stats.files_found, 0);
        assert_eq!(stats.rows_produced, 0);
        assert!(stats.all_checks_passed());
    }

    #[test]
    fn test_run_stats_skip_tracking() {
        let mut stats = RunStats::default();
        stats.skip("run_10V.txt", "no measurements extracted");

        assert_eq!(stats.skipped.len(), 1);
        assert_eq!(stats.skipped[0].0, "run_10V.txt");
    }

    #[test]
    fn test_is_critical_error() {
        let config_error = Error::configuration("bad input dir");
        let io_error = Error::io(
            "read failed",
            std::io::Error::new(std::io::ErrorKind::NotFound, "test"),
        );
        let selection_error =
            Error::missing_type_selection("run.txt", &["Voltage".to_string(), "Avg".to_string()]);

        assert!(is_critical_error(&config_error));
        assert!(!is_critical_error(&io_error));
        assert!(!is_critical_error(&selection_error));
    }

    #[test]
    fn test_discover_measurement_files() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b_10V_CH1.txt", "a_10V_CH1.csv", "notes.log"] {
            std::fs::write(temp_dir.path().join(name), "x").unwrap();
        }

        let files = discover_measurement_files(temp_dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["a_10V_CH1.csv", "b_10V_CH1.txt"]);

        let text_only = discover_text_files(temp_dir.path()).unwrap();
        assert_eq!(text_only.len(), 1);
    }

    #[test]
    fn test_discover_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(discover_measurement_files(temp_dir.path()).unwrap().is_empty());
    }
}
