//! CLI module for the generator
//!
//! ## Commands
//!
//! - `generate` - Fetch both specification documents and write the generated modules
//! - `inspect <key|code> <FILE>` - Report what extraction and enrichment would produce
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generates Rust Key/Code enums from the W3C UI Events specifications
#[derive(Parser, Debug)]
#[command(name = "uievents-codegen")]
#[command(version = VERSION)]
#[command(about = "Generates Rust Key/Code enums from the W3C UI Events specifications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch both documents and write the generated key.rs / code.rs
    Generate {
        /// Directory the generated modules are written to
        #[arg(long = "out-dir", value_name = "DIR", default_value = "src")]
        out_dir: PathBuf,

        /// Use a saved copy of the key document instead of fetching it
        #[arg(long = "key-html", value_name = "FILE")]
        key_html: Option<PathBuf>,

        /// Use a saved copy of the code document instead of fetching it
        #[arg(long = "code-html", value_name = "FILE")]
        code_html: Option<PathBuf>,
    },

    /// Report what extraction and enrichment produce for a saved document
    Inspect {
        /// Document kind: key or code
        #[arg(value_name = "KIND")]
        kind: String,

        /// Saved HTML of the document
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            out_dir,
            key_html,
            code_html,
        } => commands::generate(&out_dir, key_html.as_deref(), code_html.as_deref()),
        Command::Inspect { kind, file } => commands::inspect(&kind, &file),
    }
}
