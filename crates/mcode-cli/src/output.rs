//! Output formatting and writing utilities
//!
//! The validation report is built by a pure formatting function and written
//! through [`OutputWriter`], which targets stdout by default and any
//! `Write` sink in tests.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::trace;

const BANNER_WIDTH: usize = 60;

/// Output writer that handles colors and the destination stream
pub struct OutputWriter {
    use_color: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(use_color: bool, writer: Box<dyn Write>) -> Self {
        Self { use_color, writer }
    }

    /// Whether styling is applied
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write the validation report for `source`
    ///
    /// Warnings are listed only when `verbose` is set.
    pub fn validation_report(
        &mut self,
        source: &str,
        errors: &[String],
        warnings: &[String],
        verbose: bool,
    ) -> Result<()> {
        trace!(source, errors = errors.len(), warnings = warnings.len(), "Writing report");
        let report = format_validation_report(source, errors, warnings, verbose, self.use_color);
        self.write(&report)
    }
}

/// Format a validation report for human reading
pub fn format_validation_report(
    source: &str,
    errors: &[String],
    warnings: &[String],
    verbose: bool,
    use_color: bool,
) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!("{}\n", banner));
    output.push_str(&format!("Validation Results: {}\n", source));
    output.push_str(&format!("{}\n", banner));

    if !errors.is_empty() {
        let heading = format!("❌ ERRORS ({}):", errors.len());
        output.push_str(&format!("\n{}\n", paint_error(&heading, use_color)));
        for error in errors {
            output.push_str(&format!("   • {}\n", error));
        }
    }

    if verbose && !warnings.is_empty() {
        let heading = format!("⚠️  WARNINGS ({}):", warnings.len());
        output.push_str(&format!("\n{}\n", paint_warning(&heading, use_color)));
        for warning in warnings {
            output.push_str(&format!("   • {}\n", warning));
        }
    }

    if errors.is_empty() {
        let verdict = "✅ VALID - Profile passes all required checks";
        output.push_str(&format!("\n{}\n", paint_success(verdict, use_color)));
        if !warnings.is_empty() {
            output.push_str(&format!("   ({} warnings)\n", warnings.len()));
        }
    } else {
        let verdict = format!("❌ INVALID - {} error(s) found", errors.len());
        output.push_str(&format!("\n{}\n", paint_error(&verdict, use_color)));
    }

    output.push('\n');
    output
}

fn paint_error(text: &str, use_color: bool) -> String {
    if use_color {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}

fn paint_warning(text: &str, use_color: bool) -> String {
    if use_color {
        text.yellow().bold().to_string()
    } else {
        text.to_string()
    }
}

fn paint_success(text: &str, use_color: bool) -> String {
    if use_color {
        text.green().bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
