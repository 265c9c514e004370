use std::sync::LazyLock;

use super::PAIN;
use crate::Condition;
use crate::criteria::RatingCriterion;
use crate::engine::{ConditionProfile, GapCheck, GapRule, MetricSpec, RatingRule, Threshold};

const TREATMENTS: &[&str] = &[
    "orthotic",
    "insert",
    "injection",
    "night splint",
    "physical therapy",
    "stretching",
];

/// Plantar fasciitis, DC 5269.
pub struct PlantarFasciitis;

impl Condition for PlantarFasciitis {
    fn profile(&self) -> &ConditionProfile {
        static PROFILE: LazyLock<ConditionProfile> = LazyLock::new(|| ConditionProfile {
            id: "plantar_fasciitis",
            name: "Plantar Fasciitis",
            diagnostic_codes: vec!["5269"],
            keywords: vec!["plantar", "heel", "arch pain", "fallen arch", "foot", "feet"],
            tags: vec!["plantar_fasciitis", "foot"],
            metrics: vec![
                MetricSpec::count("painDays", PAIN),
                MetricSpec::count("bilateral", &["both feet", "both heels", "bilateral"]),
                MetricSpec::count(
                    "lossOfUse",
                    &["cannot walk", "can't walk", "unable to walk", "cannot bear weight"],
                ),
                MetricSpec::notes_flag("treatmentTried", TREATMENTS),
            ],
            rules: vec![
                RatingRule {
                    percent: 40,
                    when: Threshold::ShareAtLeast { metric: "lossOfUse", percent: 50 },
                    rationale: "Inability to walk or bear weight in at least half of logs suggests actual loss of use of the foot.",
                },
                RatingRule {
                    percent: 30,
                    when: Threshold::All(vec![
                        Threshold::AtLeast { metric: "bilateral", count: 1 },
                        Threshold::Flag { metric: "treatmentTried" },
                        Threshold::ShareAtLeast { metric: "painDays", percent: 50 },
                    ]),
                    rationale: "Pain in both feet persisting despite treatment documented.",
                },
                RatingRule {
                    percent: 20,
                    when: Threshold::All(vec![
                        Threshold::Flag { metric: "treatmentTried" },
                        Threshold::ShareAtLeast { metric: "painDays", percent: 50 },
                    ]),
                    rationale: "Foot pain persisting despite treatment documented.",
                },
                RatingRule {
                    percent: 10,
                    when: Threshold::AtLeast { metric: "painDays", count: 1 },
                    rationale: "Plantar fasciitis pain documented.",
                },
            ],
            gaps: vec![
                GapRule {
                    check: GapCheck::FewerLogsThan(10),
                    message: "Document more occurrences: fewer than 10 foot logs make a pattern hard to show.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(TREATMENTS.to_vec()),
                    message: "No treatment noted. Record orthotics, injections or therapy you have tried and whether they helped.",
                },
            ],
            criteria: vec![
                RatingCriterion::new(40, "Actual loss of use of the foot"),
                RatingCriterion::new(30, "Bilateral, not responsive to treatment"),
                RatingCriterion::new(20, "Unilateral, not responsive to treatment"),
                RatingCriterion::new(10, "Unilateral or bilateral, responsive to treatment"),
            ],
        });
        &PROFILE
    }
}
