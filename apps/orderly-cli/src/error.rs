//! # CLI Error Type
//!
//! Unified error type for commands, with a machine-readable code and an
//! exit status per failure class.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigError ─────┐                                                     │
//! │  CoreError ───────┼──► CliError ──► code()      ──► JSON report         │
//! │  io::Error ───────┤                 exit_code() ──► process status      │
//! │  serde_json ──────┘                                                     │
//! │                                                                         │
//! │  exit 0: success   exit 2: invalid input   exit 1: everything else     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With `--json`, failures are reported on stderr as:
//! ```json
//! { "code": "INVALID_INPUT", "message": "Invalid input: items[0].quantity must not be negative" }
//! ```

use serde::Serialize;
use std::io;
use thiserror::Error;

use orderly_core::CoreError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize order result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error codes for machine-readable reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Items were rejected or could not be priced
    InvalidInput,

    /// Environment configuration is malformed
    ConfigError,

    /// Reading items or writing output failed
    IoError,

    /// Amount overflow, serialization failure, anything else
    Internal,
}

/// What `--json` prints to stderr on failure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Config(_) => ErrorCode::ConfigError,
            CliError::Core(CoreError::InvalidInput(_)) => ErrorCode::InvalidInput,
            CliError::Core(CoreError::AmountOverflow { .. }) => ErrorCode::Internal,
            CliError::Io { .. } => ErrorCode::IoError,
            CliError::Serialize(_) => ErrorCode::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.code() {
            ErrorCode::InvalidInput => 2,
            _ => 1,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}
