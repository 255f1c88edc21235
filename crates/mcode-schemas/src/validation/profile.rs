//! Synthetic Profile validation rules
//!
//! Rules run as ordered phases. Only the presence phase can stop validation;
//! every other phase records into the shared [`Diagnostics`] and the next
//! phase runs regardless.
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

use crate::catalog::{is_dimension, is_motivation, MOTIVATIONS};
use crate::validation::base::{SchemaValidator, ValidationContext, ValidationHelpers as H};
use crate::validation::diagnostic::{Diagnostic, Diagnostics, Verdict};
use crate::validation::rules::{ProfileRules, REQUIRED_FIELDS};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info};

/// Validator for MCode Synthetic Profile documents
#[derive(Debug, Clone, Default)]
pub struct ProfileValidator {
    rules: ProfileRules,
}

impl ProfileValidator {
    /// Create a validator with the standard rule table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with a custom rule table
    pub fn with_rules(rules: ProfileRules) -> Self {
        Self { rules }
    }

    /// The rule table in use
    pub fn rules(&self) -> &ProfileRules {
        &self.rules
    }

    fn check_presence(&self, doc: &Value, ctx: &ValidationContext) -> Vec<Diagnostic> {
        REQUIRED_FIELDS
            .iter()
            .filter(|field| doc.get(**field).is_none())
            .map(|field| {
                Diagnostic::error(
                    ctx.child(field).path,
                    format!("Missing required field: {}", field),
                )
            })
            .collect()
    }

    fn check_version(&self, doc: &Value, ctx: &ValidationContext, out: &mut Diagnostics) {
        let version = &doc["schema_version"];
        if version.as_str() != Some(self.rules.schema_version.as_str()) {
            out.error(
                ctx.child("schema_version").path,
                format!(
                    "Invalid schema_version: expected '{}', got '{}'",
                    self.rules.schema_version,
                    H::describe(version)
                ),
            );
        }
    }

    fn check_persona_id(&self, doc: &Value, ctx: &ValidationContext, out: &mut Diagnostics) {
        let persona_id = H::text(&doc["persona_id"]);
        let hyphens = persona_id.matches('-').count();

        if persona_id.is_empty()
            || hyphens < self.rules.persona_id_min_hyphens
            || !persona_id.ends_with(self.rules.persona_id_suffix.as_str())
        {
            out.warning(
                ctx.child("persona_id").path,
                format!(
                    "persona_id '{}' may not follow format: {}",
                    persona_id,
                    self.rules.persona_id_example()
                ),
            );
        }
    }

    fn check_identity(&self, doc: &Value, ctx: &ValidationContext, out: &mut Diagnostics) {
        let identity = &doc["identity"];
        let ctx = ctx.child("identity");

        if identity["persona_type"].as_str() != Some(self.rules.persona_type.as_str()) {
            out.error(
                ctx.child("persona_type").path,
                format!("identity.persona_type must be '{}'", self.rules.persona_type),
            );
        }
        if identity["source"].as_str() != Some(self.rules.source.as_str()) {
            out.error(
                ctx.child("source").path,
                format!("identity.source must be '{}'", self.rules.source),
            );
        }
        if !H::has_content(&identity["display_name"]) {
            out.error(
                ctx.child("display_name").path,
                "identity.display_name is required",
            );
        }
    }

    fn check_top_motivations(&self, core: &Value, ctx: &ValidationContext, out: &mut Diagnostics) {
        let ctx = ctx.child("top_5");
        let top = H::items(&core["top_5"]);

        if top.len() != self.rules.top_motivations {
            out.error(
                ctx.path.clone(),
                format!(
                    "motivational_core.top_5 must have exactly {} items, found {}",
                    self.rules.top_motivations,
                    top.len()
                ),
            );
        }

        let range = self.rules.score_range();
        for (i, motivation) in top.iter().enumerate() {
            let item = ctx.child_index(i);
            let name = H::name_of(&motivation["name"]);

            if !is_motivation(&name) {
                out.error(
                    item.child("name").path,
                    format!("Invalid motivation name in top_5[{}]: '{}'", i, name),
                );
            }

            let score = &motivation["score"];
            if !H::number_in_range(score, &range) {
                out.error(
                    item.child("score").path,
                    format!("Invalid score in top_5[{}]: {}", i, H::describe(score)),
                );
            }

            let drivers = H::entry_count(&motivation["drivers"]);
            if drivers != self.rules.drivers_per_motivation {
                out.warning(
                    item.child("drivers").path,
                    format!(
                        "top_5[{}] '{}' should have exactly {} drivers, found {}",
                        i, name, self.rules.drivers_per_motivation, drivers
                    ),
                );
            }

            if !H::has_content(&motivation["flip_side"]) {
                out.error(
                    item.child("flip_side").path,
                    format!("Missing flip_side in top_5[{}] '{}'", i, name),
                );
            }
        }
    }

    fn check_full_ranking(&self, core: &Value, ctx: &ValidationContext, out: &mut Diagnostics) {
        let ctx = ctx.child("full_ranking");
        let ranking = H::items(&core["full_ranking"]);

        if ranking.len() != self.rules.ranked_motivations {
            out.error(
                ctx.path.clone(),
                format!(
                    "full_ranking must have exactly {} items, found {}",
                    self.rules.ranked_motivations,
                    ranking.len()
                ),
            );
        }

        let range = self.rules.score_range();
        let mut seen: HashSet<String> = HashSet::with_capacity(ranking.len());
        for (i, motivation) in ranking.iter().enumerate() {
            let item = ctx.child_index(i);
            let name = H::name_of(&motivation["name"]);

            if !is_motivation(&name) {
                out.error(
                    item.child("name").path,
                    format!("Invalid motivation name in full_ranking[{}]: '{}'", i, name),
                );
            }
            if !seen.insert(name.to_string()) {
                out.error(
                    item.child("name").path,
                    format!("Duplicate motivation in full_ranking: '{}'", name),
                );
            }

            let rank = &motivation["rank"];
            if !H::number_equals(rank, i + 1) {
                out.warning(
                    item.child("rank").path,
                    format!(
                        "full_ranking[{}] has rank {}, expected {}",
                        i,
                        H::describe(rank),
                        i + 1
                    ),
                );
            }

            let score = &motivation["score"];
            if !H::number_in_range(score, &range) {
                out.error(
                    item.child("score").path,
                    format!(
                        "Invalid score in full_ranking[{}] '{}': {}",
                        i,
                        name,
                        H::describe(score)
                    ),
                );
            }
        }

        let missing: Vec<String> = MOTIVATIONS
            .iter()
            .filter(|name| !seen.contains(**name))
            .map(|name| format!("'{}'", name))
            .collect();
        if !missing.is_empty() {
            out.error(
                ctx.path,
                format!("Missing motivations in full_ranking: {{{}}}", missing.join(", ")),
            );
        }
    }

    fn check_dimensions(&self, doc: &Value, ctx: &ValidationContext, out: &mut Diagnostics) {
        let dimensions = &doc["dimensions"];
        let ctx = ctx.child("dimensions");

        let strongest_ctx = ctx.child("strongest");
        let strongest = H::items(&dimensions["strongest"]);
        if strongest.len() < self.rules.min_strongest_dimensions {
            out.error(
                strongest_ctx.path.clone(),
                format!(
                    "dimensions.strongest should have at least {}-{} dimensions, found {}",
                    self.rules.min_strongest_dimensions,
                    self.rules.max_strongest_dimensions,
                    strongest.len()
                ),
            );
        }

        for (i, dimension) in strongest.iter().enumerate() {
            let item = strongest_ctx.child_index(i);
            let name = H::name_of(&dimension["name"]);

            if !is_dimension(&name) {
                out.error(
                    item.child("name").path,
                    format!("Invalid dimension name in strongest[{}]: '{}'", i, name),
                );
            }

            let blind_spots = &dimension["blind_spots"];
            let blind_ctx = item.child("blind_spots");
            if !H::has_content(&blind_spots["when_not_at_best"]) {
                out.error(
                    blind_ctx.child("when_not_at_best").path,
                    format!("Missing blind_spots.when_not_at_best for dimension '{}'", name),
                );
            }
            if !H::has_content(&blind_spots["advice"]) {
                out.error(
                    blind_ctx.child("advice").path,
                    format!("Missing blind_spots.advice for dimension '{}'", name),
                );
            }
        }

        // Entries are plain names; objects with a `name` are accepted too
        let weakest_ctx = ctx.child("weakest");
        for (i, entry) in H::items(&dimensions["weakest"]).iter().enumerate() {
            let name = match entry {
                Value::Object(_) => H::name_of(&entry["name"]),
                other => H::name_of(other),
            };
            if !is_dimension(&name) {
                out.error(
                    weakest_ctx.child_index(i).path,
                    format!("Invalid dimension name in weakest: '{}'", name),
                );
            }
        }
    }

    fn check_stories(&self, doc: &Value, ctx: &ValidationContext, out: &mut Diagnostics) {
        let ctx = ctx.child("achievement_stories");
        let stories = H::items(&doc["achievement_stories"]);

        if stories.len() < self.rules.min_stories {
            out.error(
                ctx.path.clone(),
                format!(
                    "Should have at least {}-{} achievement stories, found {}",
                    self.rules.min_stories,
                    self.rules.max_stories,
                    stories.len()
                ),
            );
        }

        for (i, story) in stories.iter().enumerate() {
            let number = i + 1;
            let expressed_ctx = ctx.child_index(i).child("motivations_expressed");
            let expressed = H::items(&story["motivations_expressed"]);

            if expressed.is_empty() {
                out.error(
                    expressed_ctx.path,
                    format!("Missing motivations_expressed in story {}", number),
                );
                continue;
            }

            if expressed.len() < self.rules.min_story_motivations {
                out.warning(
                    expressed_ctx.path.clone(),
                    format!(
                        "Story {} should have {}-{} motivations_expressed, found {}",
                        number,
                        self.rules.min_story_motivations,
                        self.rules.max_story_motivations,
                        expressed.len()
                    ),
                );
            }

            for (j, motivation) in expressed.iter().enumerate() {
                let name = H::name_of(motivation);
                if !is_motivation(&name) {
                    out.error(
                        expressed_ctx.child_index(j).path,
                        format!(
                            "Invalid motivation in story {} motivations_expressed: '{}'",
                            number, name
                        ),
                    );
                }
            }
        }
    }

    fn check_notable_patterns(&self, doc: &Value, ctx: &ValidationContext, out: &mut Diagnostics) {
        let patterns = &doc["notable_patterns"];
        let ctx = ctx.child("notable_patterns");

        let minimums = [
            ("unique_insight", self.rules.min_unique_insight_chars),
            ("emotional_signature", self.rules.min_emotional_signature_chars),
            ("collaboration_style", self.rules.min_collaboration_style_chars),
        ];
        for (field, minimum) in minimums {
            if H::char_len(&patterns[field]) < minimum {
                out.warning(
                    ctx.child(field).path,
                    format!(
                        "notable_patterns.{} should be at least {} characters",
                        field, minimum
                    ),
                );
            }
        }
    }

    fn check_interaction_patterns(
        &self,
        doc: &Value,
        ctx: &ValidationContext,
        out: &mut Diagnostics,
    ) {
        let phrases = H::items(
            &doc["interaction_patterns"]["how_to_pitch_to"]["language_that_resonates"],
        );
        if phrases.len() < self.rules.min_resonant_phrases {
            out.warning(
                ctx.child("interaction_patterns")
                    .child("how_to_pitch_to")
                    .child("language_that_resonates")
                    .path,
                format!(
                    "language_that_resonates should have {}-{} words, found {}",
                    self.rules.min_resonant_phrases,
                    self.rules.max_resonant_phrases,
                    phrases.len()
                ),
            );
        }
    }
}

impl SchemaValidator for ProfileValidator {
    type Input = Value;
    type Output = Verdict;

    fn validate_with_context(&self, doc: &Value, ctx: &ValidationContext) -> Verdict {
        let missing = self.check_presence(doc, ctx);
        if !missing.is_empty() {
            info!(missing = missing.len(), "Required top-level fields missing");
            return Verdict::MissingFields { errors: missing };
        }

        let mut out = Diagnostics::new();
        self.check_version(doc, ctx, &mut out);
        self.check_persona_id(doc, ctx, &mut out);
        self.check_identity(doc, ctx, &mut out);
        debug!(errors = out.error_count(), "Header checks complete");

        let core = &doc["motivational_core"];
        let core_ctx = ctx.child("motivational_core");
        self.check_top_motivations(core, &core_ctx, &mut out);
        self.check_full_ranking(core, &core_ctx, &mut out);
        debug!(errors = out.error_count(), "Motivational core checks complete");

        self.check_dimensions(doc, ctx, &mut out);
        self.check_stories(doc, ctx, &mut out);
        self.check_notable_patterns(doc, ctx, &mut out);
        self.check_interaction_patterns(doc, ctx, &mut out);

        info!(
            errors = out.error_count(),
            warnings = out.warning_count(),
            "Profile rules evaluated"
        );
        Verdict::Checked(out.into_report())
    }
}
