use serde::Serialize;

/// One row of a condition's rating schedule, as shown on a rating card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingCriterion {
    pub percent: i64,
    pub summary: &'static str,
}

impl RatingCriterion {
    pub const fn new(percent: i64, summary: &'static str) -> Self {
        Self { percent, summary }
    }
}

/// Shown beneath every rating card.
pub const DISCLAIMER: &str = "These estimates are based only on what you have logged. \
    They are not a VA decision; the VA assigns ratings after reviewing your full record \
    and examination results.";
