//! Canonical MCode motivation and dimension names
//!
//! Both lists are a versioned contract: adding, removing or renaming an entry
//! is a breaking change to the profile schema. Lookups are case-sensitive.
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

use std::collections::HashSet;
use std::sync::OnceLock;

/// The 32 canonical motivation names, in catalog order
pub const MOTIVATIONS: [&str; 32] = [
    "Advance",
    "Architect",
    "Be Key",
    "Be Unique",
    "Collaborate",
    "Comprehend And Express",
    "Demonstrate Learning",
    "Design",
    "Develop",
    "Do It Right",
    "Establish",
    "Evoke Recognition",
    "Excel",
    "Experience The Ideal",
    "Explore",
    "Finish",
    "Gain Ownership",
    "Identify Potential",
    "Improve",
    "Make An Impact",
    "Make It Work",
    "Make The Team",
    "Mastery",
    "Maximize",
    "Meet Needs",
    "Meet Requirements",
    "Meet The Challenge",
    "Overcome",
    "Persuade",
    "Realize The Vision",
    "Systematize",
    "Take Charge",
];

/// The 8 canonical dimension names
pub const DIMENSIONS: [&str; 8] = [
    "Achiever",
    "Driver",
    "Influencer",
    "Learner",
    "Optimizer",
    "Orchestrator",
    "Relator",
    "Visionary",
];

static MOTIVATION_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static DIMENSION_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Check whether `name` is one of the canonical motivations
pub fn is_motivation(name: &str) -> bool {
    MOTIVATION_SET
        .get_or_init(|| MOTIVATIONS.iter().copied().collect())
        .contains(name)
}

/// Check whether `name` is one of the canonical dimensions
pub fn is_dimension(name: &str) -> bool {
    DIMENSION_SET
        .get_or_init(|| DIMENSIONS.iter().copied().collect())
        .contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_are_unique() {
        let motivations: HashSet<_> = MOTIVATIONS.iter().collect();
        assert_eq!(motivations.len(), 32);

        let dimensions: HashSet<_> = DIMENSIONS.iter().collect();
        assert_eq!(dimensions.len(), 8);
    }

    #[test]
    fn test_motivation_lookup_is_case_sensitive() {
        assert!(is_motivation("Make It Work"));
        assert!(is_motivation("Take Charge"));
        assert!(!is_motivation("make it work"));
        assert!(!is_motivation("Make it Work"));
        assert!(!is_motivation(""));
    }

    #[test]
    fn test_dimension_lookup() {
        for name in DIMENSIONS {
            assert!(is_dimension(name));
        }
        assert!(!is_dimension("Advance"));
        assert!(!is_dimension("visionary"));
    }
}
