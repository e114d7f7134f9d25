//! # CLI Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; command-line flags are applied on top.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`, `--no-validate`, `--verbose`)
//! 2. Environment variables (`ORDERLY_*`)
//! 3. Defaults (this file)
//!
//! `RUST_LOG`, when set, replaces the log filter entirely.

use std::env;
use std::str::FromStr;

use crate::cli::Cli;

/// Filter used by `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_LOG_FILTER: &str = "info,orderly_cli=debug";

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The receipt text, exactly as computed
    #[default]
    Text,

    /// The full order result (exact amounts + receipt) as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default tracing filter directive (env: `ORDERLY_LOG`)
    pub log_filter: String,

    /// Output format (env: `ORDERLY_OUTPUT`)
    pub output: OutputFormat,

    /// Reject negative prices and quantities (env: `ORDERLY_VALIDATE`)
    pub validate: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: "info".to_string(),
            output: OutputFormat::Text,
            validate: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let config = CliConfig {
            log_filter: lookup("ORDERLY_LOG")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_filter),

            output: match lookup("ORDERLY_OUTPUT") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::invalid("ORDERLY_OUTPUT", &value))?,
                None => defaults.output,
            },

            validate: match lookup("ORDERLY_VALIDATE") {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::invalid("ORDERLY_VALIDATE", &value))?,
                None => defaults.validate,
            },
        };

        Ok(config)
    }

    /// Applies command-line flags on top of the loaded values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if cli.json {
            self.output = OutputFormat::Json;
        }
        if cli.no_validate {
            self.validate = false;
        }
        if cli.verbose {
            self.log_filter = VERBOSE_LOG_FILTER.to_string();
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },
}

impl ConfigError {
    fn invalid(var: &str, value: &str) -> Self {
        ConfigError::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
        }
    }
}
