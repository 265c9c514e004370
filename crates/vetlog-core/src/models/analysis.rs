use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::rating::SupportedRating;

/// A named aggregate over the relevant logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum MetricValue {
    Count(u32),
    Flag(bool),
}

impl MetricValue {
    pub fn count(&self) -> u32 {
        match self {
            MetricValue::Count(n) => *n,
            MetricValue::Flag(flag) => u32::from(*flag),
        }
    }

    pub fn is_set(&self) -> bool {
        match self {
            MetricValue::Count(n) => *n > 0,
            MetricValue::Flag(flag) => *flag,
        }
    }
}

/// What one condition analyzer concluded for one profile.
///
/// `rationale` and `evidence_gaps` are advisory display text; nothing else
/// reads them. When `has_data` is false the rating is absent and `metrics`
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalysisResult {
    pub has_data: bool,
    #[ts(type = "number | string | null")]
    pub supported_rating: SupportedRating,
    pub rationale: Vec<String>,
    pub evidence_gaps: Vec<String>,
    pub metrics: BTreeMap<String, MetricValue>,
}

impl AnalysisResult {
    /// Result for an empty log collection.
    pub fn empty() -> Self {
        Self {
            has_data: false,
            supported_rating: SupportedRating::Absent,
            rationale: Vec::new(),
            evidence_gaps: Vec::new(),
            metrics: BTreeMap::new(),
        }
    }

    /// Result when logs exist but none concern the condition.
    pub fn no_relevant_logs(gap: impl Into<String>) -> Self {
        Self {
            evidence_gaps: vec![gap.into()],
            ..Self::empty()
        }
    }

    pub fn metric(&self, name: &str) -> Option<MetricValue> {
        self.metrics.get(name).copied()
    }
}
