//! Configuration module.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Threshold buffers applied to the buffered visibility predicates.
///
/// All values are CSS pixels; 0 means "no buffer".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Buffers {
    /// Buffer for "is element top in view".
    pub top: f64,
    /// Buffer for "is element bottom in view".
    pub bottom: f64,
    /// Buffer for "is element in viewport".
    pub viewport: f64,
}

/// How the probe prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned human-readable table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Error returned when parsing an unknown output format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format {0:?} (expected \"text\" or \"json\")")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_buffers_are_zero() {
        assert_eq!(
            Buffers::default(),
            Buffers {
                top: 0.0,
                bottom: 0.0,
                viewport: 0.0
            }
        );
    }

    #[test]
    fn default_format_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" text ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert_eq!(
            "yaml".parse::<OutputFormat>(),
            Err(UnknownFormat("yaml".to_string()))
        );
    }

    #[test]
    fn format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }
}
