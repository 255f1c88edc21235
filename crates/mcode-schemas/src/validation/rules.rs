//! Rule table for Synthetic Profile validation
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Top-level fields every profile must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 11] = [
    "schema_version",
    "persona_id",
    "assessment_date",
    "identity",
    "motivational_core",
    "dimensions",
    "motivational_flow",
    "achievement_stories",
    "interaction_patterns",
    "synthetic_response_guidance",
    "notable_patterns",
];

/// Thresholds and literals the validator checks against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRules {
    /// The only accepted `schema_version`
    pub schema_version: String,
    /// Expected ending of `persona_id`
    pub persona_id_suffix: String,
    /// Minimum hyphens in `persona_id`
    pub persona_id_min_hyphens: usize,
    /// Required `identity.persona_type`
    pub persona_type: String,
    /// Required `identity.source`
    pub source: String,
    /// Exact length of `motivational_core.top_5`
    pub top_motivations: usize,
    /// Exact length of `motivational_core.full_ranking`
    pub ranked_motivations: usize,
    /// Expected driver count per top motivation
    pub drivers_per_motivation: usize,
    /// Lowest accepted score
    pub min_score: f64,
    /// Highest accepted score
    pub max_score: f64,
    /// Minimum length of `dimensions.strongest`
    pub min_strongest_dimensions: usize,
    /// Upper end of the suggested `dimensions.strongest` length, shown in messages
    pub max_strongest_dimensions: usize,
    /// Minimum number of achievement stories
    pub min_stories: usize,
    /// Upper end of the suggested story count, shown in messages
    pub max_stories: usize,
    /// Minimum `motivations_expressed` per story before warning
    pub min_story_motivations: usize,
    /// Upper end of the suggested `motivations_expressed` length, shown in messages
    pub max_story_motivations: usize,
    /// Minimum characters in `notable_patterns.unique_insight`
    pub min_unique_insight_chars: usize,
    /// Minimum characters in `notable_patterns.emotional_signature`
    pub min_emotional_signature_chars: usize,
    /// Minimum characters in `notable_patterns.collaboration_style`
    pub min_collaboration_style_chars: usize,
    /// Minimum entries in `language_that_resonates`
    pub min_resonant_phrases: usize,
    /// Upper end of the suggested `language_that_resonates` length, shown in messages
    pub max_resonant_phrases: usize,
}

impl Default for ProfileRules {
    fn default() -> Self {
        Self {
            schema_version: "1.0".to_string(),
            persona_id_suffix: "-mcode-001".to_string(),
            persona_id_min_hyphens: 2,
            persona_type: "synthetic_user".to_string(),
            source: "mcode_assessment".to_string(),
            top_motivations: 5,
            ranked_motivations: 32,
            drivers_per_motivation: 4,
            min_score: 0.0,
            max_score: 10.0,
            min_strongest_dimensions: 2,
            max_strongest_dimensions: 3,
            min_stories: 3,
            max_stories: 4,
            min_story_motivations: 3,
            max_story_motivations: 5,
            min_unique_insight_chars: 100,
            min_emotional_signature_chars: 100,
            min_collaboration_style_chars: 50,
            min_resonant_phrases: 10,
            max_resonant_phrases: 20,
        }
    }
}

impl ProfileRules {
    /// Inclusive accepted score range
    pub fn score_range(&self) -> RangeInclusive<f64> {
        self.min_score..=self.max_score
    }

    /// Example persona id shown in format warnings
    pub fn persona_id_example(&self) -> String {
        format!("firstname-lastname{}", self.persona_id_suffix)
    }
}
