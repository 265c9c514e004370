//! The generic condition analyzer.
//!
//! A [`ConditionProfile`] says which logs concern a condition, what to count
//! in them, how counts map to a percentage and which documentation gaps to
//! point out. [`analyze`] runs one profile over a log collection in a single
//! pass.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use vetlog_core::models::analysis::{AnalysisResult, MetricValue};
use vetlog_core::models::log::SymptomLog;
use vetlog_core::models::profile::ProfileId;
use vetlog_core::models::rating::SupportedRating;

use crate::criteria::RatingCriterion;
use crate::matching::{linked_to, notes_match, symptoms_match};

/// Metric holding the number of relevant logs. Always present when a
/// condition has data.
pub const TOTAL_LOGS: &str = "totalLogs";

/// Where a metric looks for its keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricSource {
    Symptoms,
    Notes,
}

/// Whether a metric counts matching logs or only records that one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Count,
    Flag,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricSpec {
    pub name: &'static str,
    pub source: MetricSource,
    pub kind: MetricKind,
    /// Lowercase substrings; a log matches when any one appears.
    pub keywords: Vec<&'static str>,
}

impl MetricSpec {
    pub fn count(name: &'static str, keywords: &[&'static str]) -> Self {
        Self {
            name,
            source: MetricSource::Symptoms,
            kind: MetricKind::Count,
            keywords: keywords.to_vec(),
        }
    }

    pub fn notes_count(name: &'static str, keywords: &[&'static str]) -> Self {
        Self {
            source: MetricSource::Notes,
            ..Self::count(name, keywords)
        }
    }

    pub fn notes_flag(name: &'static str, keywords: &[&'static str]) -> Self {
        Self {
            source: MetricSource::Notes,
            kind: MetricKind::Flag,
            ..Self::count(name, keywords)
        }
    }

    fn matches(&self, log: &SymptomLog) -> bool {
        match self.source {
            MetricSource::Symptoms => symptoms_match(log, &self.keywords),
            MetricSource::Notes => notes_match(log, &self.keywords),
        }
    }

    fn measure(&self, logs: &[&SymptomLog]) -> MetricValue {
        match self.kind {
            MetricKind::Count => {
                let n = logs.iter().filter(|log| self.matches(log)).count();
                MetricValue::Count(u32::try_from(n).unwrap_or(u32::MAX))
            }
            MetricKind::Flag => MetricValue::Flag(logs.iter().any(|log| self.matches(log))),
        }
    }
}

/// A boolean test over computed metrics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    /// The metric's count is at least `count`.
    AtLeast { metric: &'static str, count: u32 },
    /// The metric's count is at least `percent`% of the relevant logs.
    ShareAtLeast { metric: &'static str, percent: u32 },
    /// The metric is a set flag or a non-zero count.
    Flag { metric: &'static str },
    Any(Vec<Threshold>),
    All(Vec<Threshold>),
}

impl Threshold {
    pub fn holds(&self, metrics: &BTreeMap<String, MetricValue>, total: u32) -> bool {
        let count = |metric: &str| metrics.get(metric).map_or(0, MetricValue::count);
        match self {
            Threshold::AtLeast { metric, count: min } => count(*metric) >= *min,
            Threshold::ShareAtLeast { metric, percent } => {
                total > 0
                    && u64::from(count(*metric)) * 100 >= u64::from(*percent) * u64::from(total)
            }
            Threshold::Flag { metric } => metrics.get(*metric).is_some_and(MetricValue::is_set),
            Threshold::Any(parts) => parts.iter().any(|t| t.holds(metrics, total)),
            Threshold::All(parts) => parts.iter().all(|t| t.holds(metrics, total)),
        }
    }
}

/// One step of the rating cascade.
#[derive(Debug, Clone, Serialize)]
pub struct RatingRule {
    pub percent: i64,
    pub when: Threshold,
    pub rationale: &'static str,
}

/// When to suggest an evidence gap. Checked independently of the rating.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapCheck {
    FewerLogsThan(u32),
    /// No relevant log's notes mention any of the keywords.
    NotesLackAny(Vec<&'static str>),
    MetricBelow { metric: &'static str, count: u32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct GapRule {
    pub check: GapCheck,
    pub message: &'static str,
}

impl GapRule {
    fn applies(&self, logs: &[&SymptomLog], metrics: &BTreeMap<String, MetricValue>) -> bool {
        match &self.check {
            GapCheck::FewerLogsThan(n) => (logs.len() as u64) < u64::from(*n),
            GapCheck::NotesLackAny(keywords) => !logs.iter().any(|log| notes_match(log, keywords)),
            GapCheck::MetricBelow { metric, count } => {
                metrics.get(*metric).map_or(0, MetricValue::count) < *count
            }
        }
    }
}

/// Configuration record for one condition.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub diagnostic_codes: Vec<&'static str>,
    /// Symptom-label substrings that make a log relevant.
    pub keywords: Vec<&'static str>,
    /// `linked_conditions` tags that make a log relevant.
    pub tags: Vec<&'static str>,
    pub metrics: Vec<MetricSpec>,
    /// Evaluated top-down; the first rule that holds sets the rating.
    pub rules: Vec<RatingRule>,
    pub gaps: Vec<GapRule>,
    pub criteria: Vec<RatingCriterion>,
}

impl ConditionProfile {
    pub fn is_relevant(&self, log: &SymptomLog) -> bool {
        symptoms_match(log, &self.keywords) || linked_to(log, &self.tags)
    }

    pub fn measure(&self, logs: &[&SymptomLog]) -> BTreeMap<String, MetricValue> {
        let mut metrics = BTreeMap::new();
        let total = u32::try_from(logs.len()).unwrap_or(u32::MAX);
        metrics.insert(TOTAL_LOGS.to_string(), MetricValue::Count(total));
        for spec in &self.metrics {
            metrics.insert(spec.name.to_string(), spec.measure(logs));
        }
        metrics
    }

    /// The first rule whose threshold holds.
    pub fn rate(&self, metrics: &BTreeMap<String, MetricValue>, total: u32) -> Option<&RatingRule> {
        self.rules.iter().find(|rule| rule.when.holds(metrics, total))
    }
}

/// Estimate the rating `logs` support for `profile_id` under `profile`.
pub fn analyze(
    profile: &ConditionProfile,
    logs: &[SymptomLog],
    profile_id: &ProfileId,
) -> AnalysisResult {
    if logs.is_empty() {
        return AnalysisResult::empty();
    }

    let relevant: Vec<&SymptomLog> = logs
        .iter()
        .filter(|log| log.profile_id == *profile_id && profile.is_relevant(log))
        .collect();

    if relevant.is_empty() {
        debug!(condition = profile.id, profile = %profile_id, "no relevant logs");
        return AnalysisResult::no_relevant_logs(format!(
            "No {} symptom logs found for this profile.",
            profile.name
        ));
    }

    let metrics = profile.measure(&relevant);
    let total = u32::try_from(relevant.len()).unwrap_or(u32::MAX);

    let mut supported = 0;
    let mut rationale = Vec::new();
    if let Some(rule) = profile.rate(&metrics, total) {
        supported = rule.percent;
        rationale.push(rule.rationale.to_string());
    }

    let evidence_gaps = profile
        .gaps
        .iter()
        .filter(|gap| gap.applies(&relevant, &metrics))
        .map(|gap| gap.message.to_string())
        .collect();

    debug!(
        condition = profile.id,
        profile = %profile_id,
        relevant = total,
        rating = supported,
        "analyzed condition"
    );

    AnalysisResult {
        has_data: true,
        supported_rating: SupportedRating::from(supported),
        rationale,
        evidence_gaps,
        metrics,
    }
}
