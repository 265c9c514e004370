//! View model for rating cards.
//!
//! A card pairs a condition's criteria table with an analysis and marks the
//! rows the analysis supports. Rendering happens elsewhere.

use serde::Serialize;
use vetlog_core::models::analysis::AnalysisResult;
use vetlog_core::models::log::SymptomLog;
use vetlog_core::models::profile::ProfileId;

use crate::predicate::is_rating_supported;
use crate::secondary::{self, SecondaryCondition};
use crate::{Condition, all_conditions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionRow {
    pub percent: i64,
    pub summary: &'static str,
    pub supported: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingCard {
    pub condition_id: String,
    pub condition_name: String,
    pub diagnostic_codes: Vec<&'static str>,
    pub analysis: AnalysisResult,
    pub rows: Vec<CriterionRow>,
    pub secondary: &'static [SecondaryCondition],
}

impl RatingCard {
    pub fn build(condition: &dyn Condition, analysis: AnalysisResult) -> Self {
        let rows = condition
            .criteria()
            .iter()
            .map(|row| CriterionRow {
                percent: row.percent,
                summary: row.summary,
                supported: is_rating_supported(row.percent, &analysis.supported_rating),
            })
            .collect();

        Self {
            condition_id: condition.id().to_string(),
            condition_name: condition.name().to_string(),
            diagnostic_codes: condition.diagnostic_codes().to_vec(),
            analysis,
            rows,
            secondary: secondary::for_condition(condition.id()),
        }
    }

    pub fn supported_row(&self) -> Option<&CriterionRow> {
        self.rows.iter().find(|row| row.supported)
    }
}

/// Analyze every registered condition and keep the ones with data.
pub fn build_cards(logs: &[SymptomLog], profile_id: &ProfileId) -> Vec<RatingCard> {
    all_conditions()
        .iter()
        .filter_map(|condition| {
            let analysis = condition.analyze(logs, profile_id);
            analysis
                .has_data
                .then(|| RatingCard::build(condition.as_ref(), analysis))
        })
        .collect()
}
