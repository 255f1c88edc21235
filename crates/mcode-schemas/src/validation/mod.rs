//! Validation module for Synthetic Profile documents
//!
//! A document passes through a fixed sequence of rule phases:
//!
//! 1. **Presence**: the 11 required top-level fields (short-circuits on a miss)
//! 2. **Version**: `schema_version` must match exactly
//! 3. **Identifier**: `persona_id` format heuristic (warning)
//! 4. **Identity**: `persona_type`, `source`, `display_name`
//! 5. **Motivational core**: `top_5` and `full_ranking`
//! 6. **Dimensions**: `strongest` and `weakest`
//! 7. **Stories**: `achievement_stories[*].motivations_expressed`
//! 8. **Notable patterns**: free-text lengths (warnings)
//! 9. **Interaction patterns**: resonant phrase count (warning)
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod diagnostic;
pub mod profile;
pub mod rules;

// Re-export commonly used types
pub use base::{SchemaValidator, ValidationContext, ValidationHelpers};
pub use diagnostic::{Diagnostic, Diagnostics, Severity, ValidationReport, Verdict};
pub use profile::ProfileValidator;
pub use rules::{ProfileRules, REQUIRED_FIELDS};

use serde_json::Value;

/// Validate a parsed document with the standard rule table
///
/// # Examples
///
/// ```rust
/// use mcode_schemas::validation::validate_profile;
/// use serde_json::json;
///
/// let verdict = validate_profile(&json!({"schema_version": "1.0"}));
/// assert!(!verdict.is_valid());
/// assert!(verdict.is_short_circuit());
/// assert_eq!(verdict.errors().len(), 10);
/// ```
pub fn validate_profile(document: &Value) -> Verdict {
    ProfileValidator::new().validate(document)
}
