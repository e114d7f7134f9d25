//! # Orderly CLI Library
//!
//! Everything behind the `orderly` binary.
//!
//! ## Module Organization
//! ```text
//! orderly_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap argument model
//! ├── config.rs       ◄─── ORDERLY_* environment configuration
//! ├── commands.rs     ◄─── demo / receipt
//! └── error.rs        ◄─── CliError, error codes, exit status
//! ```
//!
//! ## Output Streams
//! stdout carries only the receipt (or JSON result), so it can be piped.
//! Logs and error reports go to stderr.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{CliConfig, OutputFormat};
use error::CliError;

/// Runs the CLI and returns the process exit status.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse arguments ───────── clap exits on --help / bad usage         │
/// │  2. Load configuration ────── ORDERLY_* env, then flag overrides       │
/// │  3. Initialize logging ────── RUST_LOG or the configured filter        │
/// │  4. Execute command ───────── stdout: receipt / JSON                   │
/// │  5. Report failure ────────── stderr, exit 2 (input) or 1 (other)      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load() {
        Ok(config) => config.with_overrides(&cli),
        Err(err) => {
            let err = CliError::from(err);
            // Logging is not up yet; the output format still follows the flag.
            let format = if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            report_error(&mut io::stderr().lock(), &err, format);
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config);
    debug!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands::execute(&cli.command, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(code = ?err.code(), "Command failed");
            report_error(&mut io::stderr().lock(), &err, config.output);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (wins over everything)
/// - `ORDERLY_LOG=warn` - Configured default
/// - `--verbose` - `info,orderly_cli=debug`
/// - Default: INFO level
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Writes a failure for the user: one JSON report line, or `error: ...`.
fn report_error<W: Write>(out: &mut W, err: &CliError, format: OutputFormat) {
    let written = match format {
        OutputFormat::Json => serde_json::to_string(&err.report())
            .map_err(io::Error::from)
            .and_then(|json| writeln!(out, "{json}")),
        OutputFormat::Text => writeln!(out, "error: {err}"),
    };

    // Nothing sensible is left to do if stderr itself is gone.
    let _ = written;
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderly_core::{CoreError, ValidationError};

    fn negative_quantity() -> CliError {
        CliError::from(CoreError::from(ValidationError::MustBeNonNegative {
            field: "items[0].quantity".to_string(),
        }))
    }

    #[test]
    fn test_json_report_is_the_only_output() {
        let mut out = Vec::new();
        report_error(&mut out, &negative_quantity(), OutputFormat::Json);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "INVALID_INPUT",
                "message": "Invalid input: items[0].quantity must not be negative"
            })
        );
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        report_error(&mut out, &negative_quantity(), OutputFormat::Text);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: Invalid input: items[0].quantity must not be negative\n"
        );
    }
}
