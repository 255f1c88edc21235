//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{ArgAction, Parser};
use colored::control::ShouldColorize;
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// validate-sp - Validate an MCode Synthetic Profile
///
/// Checks a Synthetic Profile JSON document against the profile rules and
/// prints a report when the profile is invalid or when --verbose is given.
#[derive(Parser, Debug)]
#[command(name = "validate-sp", version, author, about, long_about = None)]
pub struct Cli {
    /// Path to the Synthetic Profile JSON file
    #[arg(value_name = "PROFILE")]
    pub profile: Option<PathBuf>,

    /// Print the report with warnings even when valid (repeat for diagnostic logs)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments, leaving exit handling to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Whether the full report, warnings included, was requested
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }

    /// Log verbosity; the first `-v` only affects the report
    pub fn verbosity_level(&self) -> u8 {
        self.verbose.saturating_sub(1)
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        std::io::stdout().is_terminal() && ShouldColorize::from_env().should_colorize()
    }
}
