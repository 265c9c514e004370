use std::sync::LazyLock;

use crate::Condition;
use crate::criteria::RatingCriterion;
use crate::engine::{ConditionProfile, GapCheck, GapRule, MetricSpec, RatingRule, TOTAL_LOGS, Threshold};

const NOISE_EXPOSURE: &[&str] = &[
    "noise",
    "artillery",
    "gunfire",
    "weapons",
    "engine",
    "flight line",
    "explosion",
];

/// Recurrent tinnitus, DC 6260. A single 10% rating regardless of ear.
pub struct Tinnitus;

impl Condition for Tinnitus {
    fn profile(&self) -> &ConditionProfile {
        static PROFILE: LazyLock<ConditionProfile> = LazyLock::new(|| ConditionProfile {
            id: "tinnitus",
            name: "Tinnitus",
            diagnostic_codes: vec!["6260"],
            keywords: vec!["tinnitus", "ringing", "buzzing"],
            tags: vec!["tinnitus"],
            metrics: vec![
                MetricSpec::count("bothEars", &["both ears", "bilateral"]),
                MetricSpec::notes_flag("noiseExposure", NOISE_EXPOSURE),
            ],
            rules: vec![RatingRule {
                percent: 10,
                when: Threshold::AtLeast { metric: TOTAL_LOGS, count: 2 },
                rationale: "Recurrent tinnitus documented; DC 6260 assigns a single 10% rating.",
            }],
            gaps: vec![
                GapRule {
                    check: GapCheck::FewerLogsThan(2),
                    message: "Log each episode so the ringing is shown to be recurrent.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(NOISE_EXPOSURE.to_vec()),
                    message: "No in-service noise exposure described. Note the weapons, engines or duties involved.",
                },
            ],
            criteria: vec![RatingCriterion::new(10, "Recurrent tinnitus")],
        });
        &PROFILE
    }
}
