use std::sync::LazyLock;

use super::{ANKYLOSIS, DEGREES, FLARE, PAIN};
use crate::Condition;
use crate::criteria::RatingCriterion;
use crate::engine::{ConditionProfile, GapCheck, GapRule, MetricSpec, RatingRule, Threshold};

/// Thoracolumbar spine under the general rating formula and intervertebral
/// disc syndrome, DC 5237–5243.
pub struct LumbarSpine;

impl Condition for LumbarSpine {
    fn profile(&self) -> &ConditionProfile {
        static PROFILE: LazyLock<ConditionProfile> = LazyLock::new(|| ConditionProfile {
            id: "lumbar_spine",
            name: "Lower Back",
            diagnostic_codes: vec!["5237", "5238", "5239", "5240", "5241", "5242", "5243"],
            keywords: vec![
                "back pain",
                "backache",
                "low back",
                "lower back",
                "mid back",
                "stiff back",
                "sore back",
                "back spasm",
                "lumbar",
                "spine",
                "spinal",
                "sciatica",
            ],
            tags: vec!["lumbar_spine", "back"],
            metrics: vec![
                MetricSpec::count("painDays", PAIN),
                MetricSpec::count(
                    "limitedROM",
                    &["stiff", "limited", "cannot move", "frozen", "cannot bend", "can't bend"],
                ),
                MetricSpec::count("flareUps", FLARE),
                MetricSpec::count("frozen", ANKYLOSIS),
                MetricSpec::count("radiating", &["radiat", "shooting", "numb", "tingl", "sciatica"]),
                MetricSpec::notes_count("bedRest", &["bed rest", "bedrest", "incapacitat"]),
            ],
            rules: vec![
                RatingRule {
                    percent: 50,
                    when: Threshold::AtLeast { metric: "frozen", count: 1 },
                    rationale: "Frozen spine (ankylosis of the thoracolumbar spine) documented.",
                },
                RatingRule {
                    percent: 40,
                    when: Threshold::AtLeast { metric: "bedRest", count: 4 },
                    rationale: "Repeated incapacitating episodes with bed rest documented, consistent with IVDS criteria.",
                },
                RatingRule {
                    percent: 20,
                    when: Threshold::Any(vec![
                        Threshold::ShareAtLeast { metric: "limitedROM", percent: 50 },
                        Threshold::AtLeast { metric: "flareUps", count: 3 },
                    ]),
                    rationale: "Limited back motion in at least half of logs, or repeated flare-ups, documented.",
                },
                RatingRule {
                    percent: 10,
                    when: Threshold::Any(vec![
                        Threshold::AtLeast { metric: "limitedROM", count: 1 },
                        Threshold::ShareAtLeast { metric: "painDays", percent: 40 },
                    ]),
                    rationale: "Painful or limited back motion documented.",
                },
            ],
            gaps: vec![
                GapRule {
                    check: GapCheck::FewerLogsThan(10),
                    message: "Document more occurrences: fewer than 10 back logs make a pattern hard to show.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(DEGREES.to_vec()),
                    message: "No forward flexion measurement in degrees. Ask your provider to measure how far you can bend.",
                },
                GapRule {
                    check: GapCheck::MetricBelow { metric: "bedRest", count: 1 },
                    message: "No prescribed bed rest noted. If a provider ordered bed rest, record the dates in your notes.",
                },
            ],
            criteria: vec![
                RatingCriterion::new(100, "Unfavorable ankylosis of the entire spine"),
                RatingCriterion::new(50, "Unfavorable ankylosis of the entire thoracolumbar spine"),
                RatingCriterion::new(40, "Forward flexion 30° or less, or incapacitating episodes of at least 4 weeks in 12 months"),
                RatingCriterion::new(20, "Forward flexion between 30° and 60°, or muscle spasm altering gait"),
                RatingCriterion::new(10, "Forward flexion between 60° and 85°, or painful motion"),
                RatingCriterion::new(0, "Symptoms logged without measurable limitation"),
            ],
        });
        &PROFILE
    }
}
