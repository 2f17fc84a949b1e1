//! CLI error types and exit codes.

use panegrid_core::config::ConfigError;
use panegrid_core::document::DocumentError;
use panegrid_core::split::UnknownTemplate;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, IO or other non-input errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Invalid input - a document or freeform file could not be used
    pub const INVALID_INPUT: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A document or freeform file was rejected
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// No template with the given name
    #[error("Template error: {0}")]
    Template(#[from] UnknownTemplate),

    /// A command-line value is out of range
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, IO)
    /// - 2: Invalid input (bad document, unknown template, bad argument)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Document(_) | Self::Template(_) | Self::Argument(_) => {
                exit_codes::INVALID_INPUT
            }
            Self::Config(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
