//! A minimal Synthetic Profile that passes every rule
//!
//! Useful as a starting template and as the baseline document in tests:
//! mutate one field and the resulting diagnostics come only from that change.
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

use crate::catalog::MOTIVATIONS;
use serde_json::{json, Value};

/// Build a fully compliant profile with no errors and no warnings
///
/// `full_ranking` lists every canonical motivation in catalog order with
/// descending scores; `top_5` repeats the first five entries.
pub fn sample_profile() -> Value {
    let full_ranking: Vec<Value> = MOTIVATIONS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "rank": i + 1,
                "name": name,
                "score": 10.0 - i as f64 * 0.3,
            })
        })
        .collect();

    let top_5: Vec<Value> = MOTIVATIONS
        .iter()
        .take(5)
        .enumerate()
        .map(|(i, name)| {
            json!({
                "rank": i + 1,
                "name": name,
                "score": 10.0 - i as f64 * 0.3,
                "drivers": {
                    "what": "Visible forward movement on work that matters",
                    "how": "Sets milestones and checks them off in public",
                    "when": "Early in a project while the shape is still open",
                    "why": "Momentum is proof that effort is paying off"
                },
                "flip_side": "Grows restless and disengaged when progress stalls"
            })
        })
        .collect();

    json!({
        "schema_version": "1.0",
        "persona_id": "jordan-avery-mcode-001",
        "assessment_date": "2025-01-15",
        "identity": {
            "persona_type": "synthetic_user",
            "source": "mcode_assessment",
            "display_name": "Jordan Avery"
        },
        "motivational_core": {
            "top_5": top_5,
            "full_ranking": full_ranking
        },
        "dimensions": {
            "strongest": [
                {
                    "name": "Visionary",
                    "blind_spots": {
                        "when_not_at_best": "Jumps to the next big idea before the current one lands",
                        "advice": "Pair with a finisher and agree on a definition of done"
                    }
                },
                {
                    "name": "Optimizer",
                    "blind_spots": {
                        "when_not_at_best": "Keeps polishing long after the result is good enough",
                        "advice": "Time-box refinement and ship the first acceptable version"
                    }
                }
            ],
            "weakest": ["Relator", "Orchestrator"]
        },
        "motivational_flow": {
            "summary": "Moves from spotting an opening to building momentum to handing off a working result"
        },
        "achievement_stories": [
            {
                "title": "Rebuilt the release pipeline",
                "motivations_expressed": ["Advance", "Improve", "Make It Work"]
            },
            {
                "title": "Launched the mentoring circle",
                "motivations_expressed": ["Collaborate", "Develop", "Make An Impact"]
            },
            {
                "title": "Won the regional design award",
                "motivations_expressed": ["Excel", "Design", "Evoke Recognition", "Be Unique"]
            }
        ],
        "interaction_patterns": {
            "how_to_pitch_to": {
                "language_that_resonates": [
                    "momentum", "progress", "milestone", "breakthrough", "ship",
                    "iterate", "impact", "ownership", "craft", "vision"
                ]
            }
        },
        "synthetic_response_guidance": {
            "tone": "Direct and upbeat, with concrete next steps"
        },
        "notable_patterns": {
            "unique_insight": "Treats every project as a ladder of visible milestones and loses interest the moment the next rung is unclear, so the best way to keep Jordan engaged is to make progress legible.",
            "emotional_signature": "Energised by early momentum and public wins, frustrated by ambiguity that lingers, and quietly proud of systems that keep running long after the launch party has ended.",
            "collaboration_style": "Sets the pace for the group and expects teammates to keep up, while generously sharing credit once the result ships."
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::REQUIRED_FIELDS;

    #[test]
    fn test_sample_has_every_required_field() {
        let profile = sample_profile();
        for field in REQUIRED_FIELDS {
            assert!(profile.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn test_sample_ranking_covers_catalog() {
        let profile = sample_profile();
        let ranking = profile["motivational_core"]["full_ranking"].as_array().unwrap();
        assert_eq!(ranking.len(), 32);
        assert_eq!(ranking[0]["score"], 10.0);
        assert!(ranking[31]["score"].as_f64().unwrap() > 0.0);
    }
}
