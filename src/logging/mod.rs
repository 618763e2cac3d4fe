//! Tracing subscriber initialization for the probe binary.
//!
//! Report output owns stdout, so diagnostics go to a log file instead.
//! The library itself never installs a subscriber; it only emits events.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Log path has no file name component
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log path into the directory to create and the file name to append to.
///
/// A bare file name logs into the current directory.
fn split_log_path(log_path: &Path) -> Result<(PathBuf, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name))
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaults to [`DEFAULT_FILTER`]. Creates the log
/// directory if it doesn't exist.
///
/// # Errors
/// Fails if the path has no file name, the directory cannot be created,
/// or a global subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&directory, file_name);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn split_uses_parent_directory() {
        let (dir, name) = split_log_path(Path::new("/var/log/viewmaster/probe.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/viewmaster"));
        assert_eq!(name, "probe.log");
    }

    #[test]
    fn split_bare_file_name_logs_to_current_directory() {
        let (dir, name) = split_log_path(Path::new("viewmaster.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "viewmaster.log");
    }

    #[test]
    fn split_rejects_path_without_file_name() {
        assert!(matches!(
            split_log_path(Path::new("/")),
            Err(LoggingError::InvalidPath(_))
        ));
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("viewmaster_test_logs_create");
        let log_file = test_dir.join("test.log");

        let _ = fs::remove_dir_all(&test_dir);

        // May fail if a subscriber is already set; the directory is created first regardless.
        let _ = init(&log_file);

        assert!(
            test_dir.exists(),
            "Log directory should be created: {:?}",
            test_dir
        );

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("viewmaster_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        let _ = init(&log_file);
        let second = init(&log_file);

        assert!(
            matches!(second, Err(LoggingError::SubscriberAlreadySet)),
            "Second init should fail, got {:?}",
            second
        );

        let _ = fs::remove_dir_all(&test_dir);
    }
}
