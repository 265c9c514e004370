use std::sync::LazyLock;

use vetlog_core::models::analysis::AnalysisResult;
use vetlog_core::models::log::SymptomLog;
use vetlog_core::models::profile::ProfileId;

use super::{ANKYLOSIS, DEGREES, DEVICES, FLARE, PAIN};
use crate::Condition;
use crate::criteria::RatingCriterion;
use crate::engine::{ConditionProfile, GapCheck, GapRule, MetricSpec, RatingRule, Threshold};

/// Hip and thigh conditions, DC 5250–5255.
pub struct HipThigh;

impl Condition for HipThigh {
    fn profile(&self) -> &ConditionProfile {
        static PROFILE: LazyLock<ConditionProfile> = LazyLock::new(|| ConditionProfile {
            id: "hip_thigh",
            name: "Hip & Thigh",
            diagnostic_codes: vec!["5250", "5251", "5252", "5253", "5254", "5255"],
            keywords: vec!["hip", "thigh", "groin"],
            tags: vec!["hip_thigh", "hip", "thigh"],
            metrics: vec![
                MetricSpec::count("painDays", PAIN),
                MetricSpec::count("limitedROM", &["stiff", "limited", "cannot move", "frozen", "cannot bend", "can't bend"]),
                MetricSpec::count("flareUps", FLARE),
                MetricSpec::count("frozen", ANKYLOSIS),
                MetricSpec::notes_flag("assistiveDevice", DEVICES),
            ],
            rules: vec![
                RatingRule {
                    percent: 60,
                    when: Threshold::AtLeast { metric: "frozen", count: 1 },
                    rationale: "Frozen hip (ankylosis) documented, consistent with DC 5250.",
                },
                RatingRule {
                    percent: 40,
                    when: Threshold::All(vec![
                        Threshold::ShareAtLeast { metric: "limitedROM", percent: 60 },
                        Threshold::Flag { metric: "assistiveDevice" },
                    ]),
                    rationale: "Limited thigh motion in most logs with assistive device use indicates severe limitation of flexion.",
                },
                RatingRule {
                    percent: 30,
                    when: Threshold::ShareAtLeast { metric: "limitedROM", percent: 50 },
                    rationale: "Limited thigh motion in at least half of logs indicates marked limitation of flexion.",
                },
                RatingRule {
                    percent: 20,
                    when: Threshold::Any(vec![
                        Threshold::ShareAtLeast { metric: "limitedROM", percent: 30 },
                        Threshold::AtLeast { metric: "flareUps", count: 3 },
                    ]),
                    rationale: "Recurring limited hip motion or repeated flare-ups indicate moderate limitation.",
                },
                RatingRule {
                    percent: 10,
                    when: Threshold::Any(vec![
                        Threshold::AtLeast { metric: "limitedROM", count: 1 },
                        Threshold::ShareAtLeast { metric: "painDays", percent: 40 },
                    ]),
                    rationale: "Painful or limited hip motion documented.",
                },
            ],
            gaps: vec![
                GapRule {
                    check: GapCheck::FewerLogsThan(10),
                    message: "Document more occurrences: fewer than 10 hip logs make a pattern hard to show.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(DEGREES.to_vec()),
                    message: "No flexion or abduction measurements in degrees. Ask your provider to measure thigh motion.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(DEVICES.to_vec()),
                    message: "No assistive device mentioned. Note when you need a cane, crutches or a walker.",
                },
                GapRule {
                    check: GapCheck::MetricBelow { metric: "flareUps", count: 1 },
                    message: "No flare-ups logged. Record episodes when hip pain or swelling gets worse.",
                },
            ],
            criteria: vec![
                RatingCriterion::new(60, "Favorable ankylosis of the hip in flexion"),
                RatingCriterion::new(40, "Flexion of the thigh limited to 10°"),
                RatingCriterion::new(30, "Flexion of the thigh limited to 20°"),
                RatingCriterion::new(20, "Flexion of the thigh limited to 30°, or abduction lost beyond 10°"),
                RatingCriterion::new(10, "Flexion of the thigh limited to 45°, or extension limited to 5°"),
                RatingCriterion::new(0, "Symptoms logged without measurable limitation"),
            ],
        });
        &PROFILE
    }
}

/// Estimate the hip/thigh rating supported by `profile_id`'s logs.
pub fn analyze_hip_thigh(logs: &[SymptomLog], profile_id: &ProfileId) -> AnalysisResult {
    HipThigh.analyze(logs, profile_id)
}
