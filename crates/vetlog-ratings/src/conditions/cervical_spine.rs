use std::sync::LazyLock;

use super::{ANKYLOSIS, DEGREES, FLARE, PAIN};
use crate::Condition;
use crate::criteria::RatingCriterion;
use crate::engine::{ConditionProfile, GapCheck, GapRule, MetricSpec, RatingRule, Threshold};

/// Cervical spine (neck) strain, DC 5237.
pub struct CervicalSpine;

impl Condition for CervicalSpine {
    fn profile(&self) -> &ConditionProfile {
        static PROFILE: LazyLock<ConditionProfile> = LazyLock::new(|| ConditionProfile {
            id: "cervical_spine",
            name: "Neck",
            diagnostic_codes: vec!["5237"],
            keywords: vec!["neck", "cervical"],
            tags: vec!["cervical_spine", "neck"],
            metrics: vec![
                MetricSpec::count("painDays", PAIN),
                MetricSpec::count("limitedROM", &["stiff", "limited", "cannot move", "frozen", "cannot turn", "can't turn"]),
                MetricSpec::count("flareUps", FLARE),
                MetricSpec::count("frozen", ANKYLOSIS),
            ],
            rules: vec![
                RatingRule {
                    percent: 40,
                    when: Threshold::AtLeast { metric: "frozen", count: 1 },
                    rationale: "Frozen neck (ankylosis of the cervical spine) documented.",
                },
                RatingRule {
                    percent: 30,
                    when: Threshold::ShareAtLeast { metric: "limitedROM", percent: 60 },
                    rationale: "Limited neck motion in most logs indicates severely restricted flexion.",
                },
                RatingRule {
                    percent: 20,
                    when: Threshold::Any(vec![
                        Threshold::ShareAtLeast { metric: "limitedROM", percent: 30 },
                        Threshold::AtLeast { metric: "flareUps", count: 3 },
                    ]),
                    rationale: "Recurring limited neck motion or repeated flare-ups documented.",
                },
                RatingRule {
                    percent: 10,
                    when: Threshold::Any(vec![
                        Threshold::AtLeast { metric: "limitedROM", count: 1 },
                        Threshold::ShareAtLeast { metric: "painDays", percent: 40 },
                    ]),
                    rationale: "Painful or limited neck motion documented.",
                },
            ],
            gaps: vec![
                GapRule {
                    check: GapCheck::FewerLogsThan(10),
                    message: "Document more occurrences: fewer than 10 neck logs make a pattern hard to show.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(DEGREES.to_vec()),
                    message: "No neck flexion or rotation measurements in degrees. Ask your provider to record them.",
                },
            ],
            criteria: vec![
                RatingCriterion::new(40, "Unfavorable ankylosis of the entire cervical spine"),
                RatingCriterion::new(30, "Forward flexion 15° or less, or favorable ankylosis"),
                RatingCriterion::new(20, "Forward flexion between 15° and 30°"),
                RatingCriterion::new(10, "Forward flexion between 30° and 40°, or painful motion"),
                RatingCriterion::new(0, "Symptoms logged without measurable limitation"),
            ],
        });
        &PROFILE
    }
}
