//! validate-sp - Command-line validator for MCode Synthetic Profiles
//!
//! Usage: `validate-sp <profile.json> [--verbose]`. Exits 0 when the profile
//! is valid and 1 otherwise.

mod cli;
mod error;
mod handlers;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments; usage errors exit 1, --help/--version exit 0
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let use_color = cli.use_color();
    control::set_override(use_color);

    if let Err(e) = init_logging(&cli) {
        eprintln!("{}", error::format_error(&e, use_color));
    }

    match run(cli) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", error::format_error(&e, use_color));

            if e.should_show_help() {
                eprintln!("{}", error::USAGE);
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic; returns whether the profile is valid
#[instrument(skip(cli), fields(profile = ?cli.profile))]
fn run(cli: Cli) -> Result<bool> {
    let _timer = Timer::new("cli_execution");

    let path = cli.profile.as_deref().ok_or(Error::MissingProfile)?;
    let mut output = OutputWriter::new(cli.use_color());

    tracing::info!(
        verbose = cli.is_verbose(),
        color = output.use_color(),
        "Validating profile"
    );

    handlers::handle_validate(path, cli.is_verbose(), &mut output)
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_env();
    logging::init_logging(logging_config)
}
