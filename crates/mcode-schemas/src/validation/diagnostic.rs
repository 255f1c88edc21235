//! Diagnostic and verdict types for Synthetic Profile validation
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much a diagnostic matters for the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Invalidates the document
    Error,
    /// Advisory only
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single rule violation with path context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error or warning
    pub severity: Severity,
    /// JSON path the diagnostic refers to
    pub path: String,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a warning diagnostic
    pub fn warning<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Ordered error and warning accumulator threaded through the rule phases
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn error<P, M>(&mut self, path: P, message: M)
    where
        P: Into<String>,
        M: Into<String>,
    {
        self.errors.push(Diagnostic::error(path, message));
    }

    /// Record a warning
    pub fn warning<P, M>(&mut self, path: P, message: M)
    where
        P: Into<String>,
        M: Into<String>,
    {
        self.warnings.push(Diagnostic::warning(path, message));
    }

    /// Number of errors recorded so far
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of warnings recorded so far
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Finish accumulation
    pub fn into_report(self) -> ValidationReport {
        ValidationReport {
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

/// Result of running every rule phase over a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Errors in the order they were found
    pub errors: Vec<Diagnostic>,
    /// Warnings in the order they were found
    pub warnings: Vec<Diagnostic>,
}

impl ValidationReport {
    /// A report is valid when it has no errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of validating one document
///
/// The presence check is the only rule that stops validation early, so it
/// gets its own variant instead of an ordinary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// One or more required top-level fields are absent; nothing else was checked
    MissingFields {
        /// One error per missing field
        errors: Vec<Diagnostic>,
    },
    /// Every rule phase ran
    Checked(ValidationReport),
}

impl Verdict {
    /// Whether the document passed every error-level rule
    pub fn is_valid(&self) -> bool {
        match self {
            Verdict::MissingFields { errors } => errors.is_empty(),
            Verdict::Checked(report) => report.is_valid(),
        }
    }

    /// Whether validation stopped at the presence check
    pub fn is_short_circuit(&self) -> bool {
        matches!(self, Verdict::MissingFields { .. })
    }

    /// Errors in discovery order
    pub fn errors(&self) -> &[Diagnostic] {
        match self {
            Verdict::MissingFields { errors } => errors,
            Verdict::Checked(report) => &report.errors,
        }
    }

    /// Warnings in discovery order (always empty after a short-circuit)
    pub fn warnings(&self) -> &[Diagnostic] {
        match self {
            Verdict::MissingFields { .. } => &[],
            Verdict::Checked(report) => &report.warnings,
        }
    }

    /// Error messages only
    pub fn error_messages(&self) -> Vec<String> {
        self.errors().iter().map(|d| d.message.clone()).collect()
    }

    /// Warning messages only
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings().iter().map(|d| d.message.clone()).collect()
    }
}
