//! # Orderly CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration (environment + flags)
//! 3. Initialize tracing (logging to stderr)
//! 4. Run the command, print to stdout
//! 5. Map any error to an exit status

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    orderly_cli::run()
}
