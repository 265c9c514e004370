use std::sync::LazyLock;

use super::{ANKYLOSIS, DEGREES, DEVICES, FLARE, INSTABILITY, LIMITED_MOTION, PAIN};
use crate::Condition;
use crate::criteria::RatingCriterion;
use crate::engine::{ConditionProfile, GapCheck, GapRule, MetricSpec, RatingRule, Threshold};

/// Knee and lower leg conditions, DC 5256–5261.
pub struct Knee;

impl Condition for Knee {
    fn profile(&self) -> &ConditionProfile {
        static PROFILE: LazyLock<ConditionProfile> = LazyLock::new(|| ConditionProfile {
            id: "knee",
            name: "Knee",
            diagnostic_codes: vec!["5256", "5257", "5258", "5259", "5260", "5261"],
            keywords: vec!["knee", "patella", "kneecap", "meniscus"],
            tags: vec!["knee"],
            metrics: vec![
                MetricSpec::count("painDays", PAIN),
                MetricSpec::count("limitedROM", LIMITED_MOTION),
                MetricSpec::count("instability", INSTABILITY),
                MetricSpec::count("locking", &["locking", "locked", "catching"]),
                MetricSpec::count("flareUps", FLARE),
                MetricSpec::count("frozen", ANKYLOSIS),
                MetricSpec::notes_flag("assistiveDevice", DEVICES),
            ],
            rules: vec![
                RatingRule {
                    percent: 30,
                    when: Threshold::AtLeast { metric: "frozen", count: 1 },
                    rationale: "Frozen knee (ankylosis) documented, consistent with DC 5256.",
                },
                RatingRule {
                    percent: 30,
                    when: Threshold::All(vec![
                        Threshold::ShareAtLeast { metric: "instability", percent: 50 },
                        Threshold::Flag { metric: "assistiveDevice" },
                    ]),
                    rationale: "Frequent instability with brace or device use indicates severe recurrent instability.",
                },
                RatingRule {
                    percent: 20,
                    when: Threshold::Any(vec![
                        Threshold::ShareAtLeast { metric: "instability", percent: 30 },
                        Threshold::AtLeast { metric: "locking", count: 3 },
                    ]),
                    rationale: "Recurring instability or frequent locking episodes documented.",
                },
                RatingRule {
                    percent: 20,
                    when: Threshold::ShareAtLeast { metric: "limitedROM", percent: 50 },
                    rationale: "Limited knee motion in at least half of logs.",
                },
                RatingRule {
                    percent: 10,
                    when: Threshold::Any(vec![
                        Threshold::AtLeast { metric: "limitedROM", count: 1 },
                        Threshold::AtLeast { metric: "instability", count: 1 },
                        Threshold::ShareAtLeast { metric: "painDays", percent: 40 },
                    ]),
                    rationale: "Painful motion, limitation or slight instability of the knee documented.",
                },
            ],
            gaps: vec![
                GapRule {
                    check: GapCheck::FewerLogsThan(10),
                    message: "Document more occurrences: fewer than 10 knee logs make a pattern hard to show.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(DEGREES.to_vec()),
                    message: "No flexion or extension measurements in degrees. Ask your provider to measure knee motion.",
                },
                GapRule {
                    check: GapCheck::MetricBelow { metric: "instability", count: 1 },
                    message: "No instability logged. If your knee gives way, record each time it happens.",
                },
            ],
            criteria: vec![
                RatingCriterion::new(30, "Ankylosis in full extension or slight flexion, or severe recurrent instability"),
                RatingCriterion::new(20, "Moderate recurrent instability, or flexion limited to 30°"),
                RatingCriterion::new(10, "Slight instability, painful motion, or flexion limited to 45°"),
                RatingCriterion::new(0, "Symptoms logged without measurable limitation"),
            ],
        });
        &PROFILE
    }
}
