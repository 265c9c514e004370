use std::sync::LazyLock;

use super::{ANKYLOSIS, DEGREES, FLARE, LIMITED_MOTION, PAIN};
use crate::Condition;
use crate::criteria::RatingCriterion;
use crate::engine::{ConditionProfile, GapCheck, GapRule, MetricSpec, RatingRule, Threshold};

/// Shoulder and arm conditions, DC 5200–5203.
pub struct ShoulderArm;

impl Condition for ShoulderArm {
    fn profile(&self) -> &ConditionProfile {
        static PROFILE: LazyLock<ConditionProfile> = LazyLock::new(|| ConditionProfile {
            id: "shoulder_arm",
            name: "Shoulder & Arm",
            diagnostic_codes: vec!["5200", "5201", "5202", "5203"],
            keywords: vec!["shoulder", "rotator", "upper arm"],
            tags: vec!["shoulder_arm", "shoulder"],
            metrics: vec![
                MetricSpec::count("painDays", PAIN),
                MetricSpec::count("limitedROM", LIMITED_MOTION),
                MetricSpec::count(
                    "overheadLimited",
                    &["cannot raise", "can't raise", "cannot reach", "can't reach", "overhead"],
                ),
                MetricSpec::count("dislocations", &["dislocat", "popped out", "subluxation"]),
                MetricSpec::count("flareUps", FLARE),
                MetricSpec::count("frozen", ANKYLOSIS),
            ],
            rules: vec![
                RatingRule {
                    percent: 30,
                    when: Threshold::AtLeast { metric: "frozen", count: 1 },
                    rationale: "Frozen shoulder (ankylosis of the scapulohumeral joint) documented, consistent with DC 5200.",
                },
                RatingRule {
                    percent: 20,
                    when: Threshold::Any(vec![
                        Threshold::ShareAtLeast { metric: "overheadLimited", percent: 50 },
                        Threshold::AtLeast { metric: "dislocations", count: 2 },
                    ]),
                    rationale: "Arm motion limited at shoulder level, or recurrent dislocation, documented.",
                },
                RatingRule {
                    percent: 20,
                    when: Threshold::Any(vec![
                        Threshold::ShareAtLeast { metric: "limitedROM", percent: 30 },
                        Threshold::AtLeast { metric: "flareUps", count: 3 },
                    ]),
                    rationale: "Recurring limited shoulder motion or repeated flare-ups documented.",
                },
                RatingRule {
                    percent: 10,
                    when: Threshold::Any(vec![
                        Threshold::AtLeast { metric: "limitedROM", count: 1 },
                        Threshold::ShareAtLeast { metric: "painDays", percent: 40 },
                    ]),
                    rationale: "Painful shoulder motion documented.",
                },
            ],
            gaps: vec![
                GapRule {
                    check: GapCheck::FewerLogsThan(10),
                    message: "Document more occurrences: fewer than 10 shoulder logs make a pattern hard to show.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(DEGREES.to_vec()),
                    message: "No flexion or abduction measurements in degrees. Ask your provider how high you can raise your arm.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(vec!["dominant", "right-handed", "left-handed"]),
                    message: "Note whether the affected arm is your dominant arm; ratings differ for the major and minor side.",
                },
            ],
            criteria: vec![
                RatingCriterion::new(30, "Favorable ankylosis of the scapulohumeral articulation"),
                RatingCriterion::new(20, "Arm motion limited at shoulder level, or recurrent dislocation"),
                RatingCriterion::new(10, "Painful motion of the shoulder"),
                RatingCriterion::new(0, "Symptoms logged without measurable limitation"),
            ],
        });
        &PROFILE
    }
}
