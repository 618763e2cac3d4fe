//! Configuration file loading with precedence handling.

use super::{Buffers, OutputFormat};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "VIEWMASTER_CONFIG";

/// Environment variable overriding the output format.
pub const FORMAT_ENV_VAR: &str = "VIEWMASTER_FORMAT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/viewmaster/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default buffer for "is element top in view".
    #[serde(default)]
    pub top_buffer: Option<f64>,

    /// Default buffer for "is element bottom in view".
    #[serde(default)]
    pub bottom_buffer: Option<f64>,

    /// Default buffer for "is element in viewport".
    #[serde(default)]
    pub viewport_buffer: Option<f64>,

    /// Report format.
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Predicate buffers.
    pub buffers: Buffers,
    /// Report format.
    pub format: OutputFormat,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            buffers: Buffers::default(),
            format: OutputFormat::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/viewmaster/viewmaster.log` on Linux, the platform
/// state directory elsewhere, or `viewmaster.log` in the current directory
/// when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("viewmaster").join("viewmaster.log")
    } else {
        PathBuf::from("viewmaster.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`<config dir>/viewmaster/config.toml`).
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("viewmaster").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VIEWMASTER_CONFIG` environment variable
/// 3. Default path from [`default_config_path`]
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        buffers: Buffers {
            top: config.top_buffer.unwrap_or(defaults.buffers.top),
            bottom: config.bottom_buffer.unwrap_or(defaults.buffers.bottom),
            viewport: config.viewport_buffer.unwrap_or(defaults.buffers.viewport),
        },
        format: config.format.unwrap_or(defaults.format),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `VIEWMASTER_FORMAT`. Unrecognized values are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(FORMAT_ENV_VAR) {
        match raw.parse::<OutputFormat>() {
            Ok(format) => config.format = format,
            Err(err) => tracing::warn!(%err, "ignoring {FORMAT_ENV_VAR}"),
        }
    }

    config
}

/// Overrides collected from command-line flags.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CliOverrides {
    /// `--format`.
    pub format: Option<OutputFormat>,
    /// `--top-buffer`.
    pub top_buffer: Option<f64>,
    /// `--bottom-buffer`.
    pub bottom_buffer: Option<f64>,
    /// `--viewport-buffer`.
    pub viewport_buffer: Option<f64>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(format) = overrides.format {
        config.format = format;
    }

    if let Some(top) = overrides.top_buffer {
        config.buffers.top = top;
    }

    if let Some(bottom) = overrides.bottom_buffer {
        config.buffers.bottom = bottom;
    }

    if let Some(viewport) = overrides.viewport_buffer {
        config.buffers.viewport = viewport;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
