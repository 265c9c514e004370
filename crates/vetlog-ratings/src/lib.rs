//! vetlog-ratings
//!
//! Rating estimation from symptom logs. Pure and synchronous — no storage
//! dependency. Each supported condition is a configuration record run by one
//! generic analyzer.

pub mod card;
pub mod conditions;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod matching;
pub mod predicate;
pub mod secondary;

use vetlog_core::models::analysis::AnalysisResult;
use vetlog_core::models::log::SymptomLog;
use vetlog_core::models::profile::ProfileId;

use criteria::RatingCriterion;
use engine::ConditionProfile;
use error::RatingsError;

pub use predicate::is_rating_supported;

/// Trait implemented by each rateable condition.
pub trait Condition: Send + Sync {
    /// The configuration record driving the analyzer.
    fn profile(&self) -> &ConditionProfile;

    /// Unique identifier (e.g., "ankle_achilles", "hip_thigh").
    fn id(&self) -> &str {
        self.profile().id
    }

    /// Human-readable name (e.g., "Ankle & Achilles").
    fn name(&self) -> &str {
        self.profile().name
    }

    /// VA diagnostic codes covered by this condition.
    fn diagnostic_codes(&self) -> &[&'static str] {
        &self.profile().diagnostic_codes
    }

    /// Rating schedule rows, highest percentage first.
    fn criteria(&self) -> &[RatingCriterion] {
        &self.profile().criteria
    }

    /// Scan `logs` for `profile_id` and estimate the supported rating.
    fn analyze(&self, logs: &[SymptomLog], profile_id: &ProfileId) -> AnalysisResult {
        engine::analyze(self.profile(), logs, profile_id)
    }
}

/// Return all registered conditions.
pub fn all_conditions() -> Vec<Box<dyn Condition>> {
    vec![
        Box::new(conditions::ankle_achilles::AnkleAchilles),
        Box::new(conditions::hip_thigh::HipThigh),
        Box::new(conditions::knee::Knee),
        Box::new(conditions::shoulder_arm::ShoulderArm),
        Box::new(conditions::lumbar_spine::LumbarSpine),
        Box::new(conditions::cervical_spine::CervicalSpine),
        Box::new(conditions::plantar_fasciitis::PlantarFasciitis),
        Box::new(conditions::migraine::Migraine),
        Box::new(conditions::tinnitus::Tinnitus),
    ]
}

/// Look up a condition by ID.
pub fn get_condition(id: &str) -> Option<Box<dyn Condition>> {
    all_conditions().into_iter().find(|c| c.id() == id)
}

/// Look up a condition by ID, failing with [`RatingsError::UnknownCondition`].
pub fn require_condition(id: &str) -> Result<Box<dyn Condition>, RatingsError> {
    get_condition(id).ok_or_else(|| RatingsError::UnknownCondition(id.to_string()))
}
