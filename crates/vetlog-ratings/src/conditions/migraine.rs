use std::sync::LazyLock;

use crate::Condition;
use crate::criteria::RatingCriterion;
use crate::engine::{ConditionProfile, GapCheck, GapRule, MetricSpec, RatingRule, Threshold};

/// Migraine headaches, DC 8100. Each relevant log is one attack.
pub struct Migraine;

impl Condition for Migraine {
    fn profile(&self) -> &ConditionProfile {
        static PROFILE: LazyLock<ConditionProfile> = LazyLock::new(|| ConditionProfile {
            id: "migraine",
            name: "Migraine",
            diagnostic_codes: vec!["8100"],
            keywords: vec!["migraine", "headache"],
            tags: vec!["migraine"],
            metrics: vec![
                MetricSpec::count(
                    "prostrating",
                    &["prostrat", "bedridden", "dark room", "lie down", "vomit", "could not function"],
                ),
                MetricSpec::count("aura", &["aura", "vision", "light sensitiv"]),
                MetricSpec::notes_count(
                    "workImpact",
                    &["missed work", "left work", "called out", "sick day", "leave early"],
                ),
            ],
            rules: vec![
                RatingRule {
                    percent: 50,
                    when: Threshold::All(vec![
                        Threshold::AtLeast { metric: "prostrating", count: 12 },
                        Threshold::AtLeast { metric: "workImpact", count: 3 },
                    ]),
                    rationale: "Very frequent prostrating attacks with lost work documented, consistent with severe economic inadaptability.",
                },
                RatingRule {
                    percent: 30,
                    when: Threshold::AtLeast { metric: "prostrating", count: 6 },
                    rationale: "Prostrating attacks logged at a rate consistent with once a month.",
                },
                RatingRule {
                    percent: 10,
                    when: Threshold::AtLeast { metric: "prostrating", count: 3 },
                    rationale: "Prostrating attacks logged at a rate consistent with once every two months.",
                },
            ],
            gaps: vec![
                GapRule {
                    check: GapCheck::FewerLogsThan(6),
                    message: "Log every attack, including mild ones, so frequency can be shown over several months.",
                },
                GapRule {
                    check: GapCheck::MetricBelow { metric: "prostrating", count: 1 },
                    message: "No prostrating attacks logged. Note when an attack forces you to stop and lie down.",
                },
                GapRule {
                    check: GapCheck::NotesLackAny(vec!["hour", "hrs", "minute", "all day"]),
                    message: "No attack durations noted. Record how long each attack lasted.",
                },
                GapRule {
                    check: GapCheck::MetricBelow { metric: "workImpact", count: 1 },
                    message: "No effect on work noted. Record missed or shortened work days.",
                },
            ],
            criteria: vec![
                RatingCriterion::new(50, "Very frequent completely prostrating and prolonged attacks productive of severe economic inadaptability"),
                RatingCriterion::new(30, "Characteristic prostrating attacks occurring on average once a month over the last several months"),
                RatingCriterion::new(10, "Characteristic prostrating attacks averaging one in two months over the last several months"),
                RatingCriterion::new(0, "Less frequent attacks"),
            ],
        });
        &PROFILE
    }
}
