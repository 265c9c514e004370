use vetlog_core::models::rating::SupportedRating;

/// Whether `rating_percent` is covered by `supported`.
///
/// Exact values compare by equality; ranges are inclusive at both ends.
/// Bounds are used as given, so a reversed range such as `"50-10"` covers
/// nothing. Unparsed bounds never match.
pub fn is_rating_supported(rating_percent: i64, supported: &SupportedRating) -> bool {
    match *supported {
        SupportedRating::Absent => false,
        SupportedRating::Exact(value) => value == Some(rating_percent),
        SupportedRating::Range(Some(low), Some(high)) => {
            low <= rating_percent && rating_percent <= high
        }
        SupportedRating::Range(_, _) => false,
    }
}
