use std::sync::LazyLock;

use vetlog_core::models::analysis::AnalysisResult;
use vetlog_core::models::log::SymptomLog;
use vetlog_core::models::profile::ProfileId;

use super::{ANKYLOSIS, DEGREES, DEVICES, FLARE, LIMITED_MOTION, PAIN};
use crate::Condition;
use crate::criteria::RatingCriterion;
use crate::engine::{ConditionProfile, GapCheck, GapRule, MetricSpec, RatingRule, Threshold};

/// Ankle and Achilles tendon conditions, DC 5270–5274.
pub struct AnkleAchilles;

impl Condition for AnkleAchilles {
    fn profile(&self) -> &ConditionProfile {
        static PROFILE: LazyLock<ConditionProfile> = LazyLock::new(|| ConditionProfile {
            id: "ankle_achilles",
            name: "Ankle & Achilles",
            diagnostic_codes: vec!["5270", "5271", "5272", "5273", "5274"],
            keywords: vec!["ankle", "achilles"],
            tags: vec!["ankle_achilles", "ankle", "achilles"],
            metrics: vec![
                MetricSpec::count("painDays", PAIN),
                MetricSpec::count("limitedROM", LIMITED_MOTION),
                MetricSpec::count("flareUps", FLARE),
                MetricSpec::count("frozen", ANKYLOSIS),
                MetricSpec::notes_flag("assistiveDevice", DEVICES),
            ],
            rules: vec![
                RatingRule {
                    percent: 40,
                    when: Threshold::AtLeast { metric: "frozen", count: 1 },
                    rationale: "Frozen ankle (ankylosis) documented, consistent with DC 5270.",
                },
                RatingRule {
                    percent: 30,
                    when: Threshold::ShareAtLeast { metric: "limitedROM", percent: 50 },
                    rationale: "Limited ankle motion in at least half of logs indicates marked limitation.",
                },
                RatingRule {
                    percent: 20,
                    when: Threshold::Any(vec![
                        Threshold::ShareAtLeast { metric: "limitedROM", percent: 30 },
                        Threshold::AtLeast { metric: "flareUps", count: 3 },
                    ]),
                    rationale: "Recurring limited motion or repeated flare-ups indicate moderate limitation.",
                },
                RatingRule {
                    percent: 10,
                    when: Threshold::Any(vec![
                        Threshold::AtLeast { metric: "limitedROM", count: 1 },
                        Threshold::ShareAtLeast { metric: "painDays", percent: 40 },
                    ]),
                    rationale: "Painful or limited ankle motion documented.",
                },
            ],
            gaps: vec![
                GapRule {
                    check: GapCheck::FewerLogsThan(10),
                    message: "Document more occurrences: fewer than 10 ankle logs make a pattern hard to show.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(DEGREES.to_vec()),
                    message: "No range-of-motion measurements in degrees. Ask your provider to measure dorsiflexion and plantar flexion.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(DEVICES.to_vec()),
                    message: "No brace or assistive device mentioned. Note when you rely on a brace, boot, cane or crutches.",
                },
            ],
            criteria: vec![
                RatingCriterion::new(40, "Ankylosis in plantar flexion over 40° or dorsiflexion over 10°, or with abduction, adduction, inversion or eversion deformity"),
                RatingCriterion::new(30, "Ankylosis in plantar flexion between 30° and 40°, or dorsiflexion between 0° and 10°"),
                RatingCriterion::new(20, "Marked limited motion of the ankle"),
                RatingCriterion::new(10, "Moderate limited motion of the ankle"),
                RatingCriterion::new(0, "Symptoms logged without measurable limitation"),
            ],
        });
        &PROFILE
    }
}

/// Estimate the ankle/Achilles rating supported by `profile_id`'s logs.
pub fn analyze_ankle_achilles(logs: &[SymptomLog], profile_id: &ProfileId) -> AnalysisResult {
    AnkleAchilles.analyze(logs, profile_id)
}
