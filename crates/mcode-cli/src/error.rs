//! Error types and handling for the CLI
//!
//! Rule violations are not errors here: they are reported and turned into
//! exit code 1 by the caller. This type covers the failures around them.

use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// One-line usage shown when no profile path is given
pub const USAGE: &str = "Usage: validate-sp <profile.json> [--verbose]";

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (writing the report, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No profile path on the command line
    #[error("No profile path given")]
    MissingProfile,

    /// The tracing subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl Error {
    /// Create a logging error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::MissingProfile => 1,
            Self::Logging(_) => 1,
        }
    }

    /// Check if this error should display the usage line
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::MissingProfile)
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
