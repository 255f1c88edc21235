//! MCode Schemas - Synthetic Profile catalogs and validation
//!
//! This crate validates MCode **Synthetic Profile** (SP) documents: JSON
//! personas built from an MCode assessment. A document is checked against a
//! fixed rule table and the result is a [`Verdict`] carrying ordered errors
//! (which invalidate the profile) and warnings (which never do).
//!
//! ## Features
//!
//! - **Canonical Catalogs**: the 32 motivation names and 8 dimension names
//! - **Rule-Based Validation**: presence, version, identity, motivational core,
//!   dimensions, achievement stories and free-text quality checks
//! - **Accumulated Diagnostics**: every violation is reported in one pass
//! - **Document Loading**: file reading with distinct not-found/malformed errors
//!
//! ## Quick Start
//!
//! ```rust
//! use mcode_schemas::{sample_profile, ProfileValidator, SchemaValidator};
//!
//! let validator = ProfileValidator::new();
//! let verdict = validator.validate(&sample_profile());
//!
//! assert!(verdict.is_valid());
//! assert!(verdict.error_messages().is_empty());
//! ```
//!
//! ## Severities
//!
//! - **Errors**: missing required fields, wrong version or identity literals,
//!   count mismatches, unknown names, duplicates and out-of-range scores
//! - **Warnings**: persona id format, driver counts, rank/position drift,
//!   short stories and short free-text fields
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

pub mod catalog;
pub mod loader;
pub mod sample;
pub mod validation;

// Re-export commonly used types for convenience
pub use catalog::{is_dimension, is_motivation, DIMENSIONS, MOTIVATIONS};
pub use loader::{load_profile, parse_profile, LoaderError, LoaderResult};
pub use sample::sample_profile;
pub use validation::{
    validate_profile, Diagnostic, Diagnostics, ProfileRules, ProfileValidator, SchemaValidator,
    Severity, ValidationContext, ValidationHelpers, ValidationReport, Verdict, REQUIRED_FIELDS,
};
