//! Case-insensitive keyword matching over free text.
//!
//! Keyword tables are stored lowercase; only the haystack is folded.

use vetlog_core::models::log::SymptomLog;

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    if keywords.is_empty() || text.is_empty() {
        return false;
    }
    let folded = text.to_lowercase();
    keywords.iter().any(|keyword| folded.contains(keyword))
}

/// Any symptom label contains any keyword.
pub fn symptoms_match(log: &SymptomLog, keywords: &[&str]) -> bool {
    log.symptoms.iter().any(|s| contains_any(s, keywords))
}

pub fn notes_match(log: &SymptomLog, keywords: &[&str]) -> bool {
    contains_any(log.notes(), keywords)
}

/// The log is tagged with one of `tags`.
pub fn linked_to(log: &SymptomLog, tags: &[&str]) -> bool {
    log.linked_conditions
        .iter()
        .any(|linked| tags.contains(&linked.as_str()))
}
