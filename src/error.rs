//! Top-level error type for the probe binary.
//!
//! Geometry queries are infallible and have no error type. Everything that
//! can fail lives at the edges (config files, scene files, logger setup,
//! report serialization) and converts into [`AppError`] via `From`, so the
//! binary can propagate with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`]
//!   - [`ConfigError`] - config file unreadable or invalid
//!   - [`LoggingError`] - log directory or subscriber setup failed
//!   - [`SceneError`] - scene file unreadable, invalid or inconsistent
//!   - `serde_json::Error` - report serialization failed

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::scene::SceneError;
use thiserror::Error;

/// Top-level error encompassing every failure the probe can hit.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The scene could not be loaded or evaluated.
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// The report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_error_converts_and_keeps_message() {
        let err: AppError = ConfigError::ParseError {
            path: PathBuf::from("/etc/viewmaster.toml"),
            reason: "expected `=`".to_string(),
        }
        .into();

        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid TOML in /etc/viewmaster.toml: expected `=`"
        );
    }

    #[test]
    fn scene_error_converts() {
        let err: AppError = SceneError::DuplicateElement("nav".to_string()).into();
        assert_eq!(err.to_string(), "Scene error: Duplicate element name \"nav\"");
    }

    #[test]
    fn logging_error_converts() {
        let err: AppError = LoggingError::SubscriberAlreadySet.into();
        assert!(matches!(err, AppError::Logging(_)));
    }
}
