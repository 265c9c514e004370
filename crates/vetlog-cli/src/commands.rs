//! Subcommand implementations. Output goes to a caller-supplied writer.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use eyre::{Result, WrapErr};
use tracing::info;
use uuid::Uuid;
use vetlog_core::keys;
use vetlog_core::models::analysis::AnalysisResult;
use vetlog_core::models::log::{SymptomLog, parse_logs};
use vetlog_core::models::profile::{ProfileId, ProfileType};
use vetlog_core::models::rating::SupportedRating;
use vetlog_export::render::render_summary;
use vetlog_ratings::card::build_cards;
use vetlog_ratings::{Condition, all_conditions, is_rating_supported, require_condition};
use vetlog_storage::logs::{FileLogStore, LogStore};
use vetlog_storage::objects;

pub fn list_conditions(out: &mut impl Write) -> Result<()> {
    for condition in all_conditions() {
        writeln!(
            out,
            "{:<18} {:<20} DC {}",
            condition.id(),
            condition.name(),
            condition.diagnostic_codes().join(", ")
        )?;
    }
    Ok(())
}

/// Analyze one condition, or every condition with data.
pub fn analyze(
    store: &dyn LogStore,
    profile: &ProfileId,
    condition_id: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let logs = store.load_logs()?;
    let conditions: Vec<Box<dyn Condition>> = match condition_id {
        Some(id) => vec![require_condition(id)?],
        None => all_conditions(),
    };

    let mut results: BTreeMap<String, AnalysisResult> = BTreeMap::new();
    for condition in &conditions {
        let result = condition.analyze(&logs, profile);
        // A single requested condition is reported even without data.
        if result.has_data || condition_id.is_some() {
            results.insert(condition.id().to_string(), result);
        }
    }
    info!(profile = %profile, logs = logs.len(), conditions = results.len(), "analysis complete");

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
        return Ok(());
    }

    if results.is_empty() {
        writeln!(out, "No relevant symptom logs for profile {profile}.")?;
        return Ok(());
    }
    for (id, result) in &results {
        write_result(out, id, result)?;
    }
    Ok(())
}

fn write_result(out: &mut impl Write, id: &str, result: &AnalysisResult) -> Result<()> {
    if result.has_data {
        writeln!(out, "{id}: {}%", result.supported_rating)?;
    } else {
        writeln!(out, "{id}: no data")?;
    }
    for line in &result.rationale {
        writeln!(out, "  why: {line}")?;
    }
    for gap in &result.evidence_gaps {
        writeln!(out, "  gap: {gap}")?;
    }
    Ok(())
}

/// Render the summary report; optionally keep a copy in the data dir.
pub fn report(
    store: &FileLogStore,
    profile: &ProfileId,
    profile_type: ProfileType,
    save: bool,
    out: &mut impl Write,
) -> Result<()> {
    let logs = store.load_logs()?;
    let cards = build_cards(&logs, profile);
    let text = render_summary(&cards, profile_type)?;

    if save {
        let key = keys::summary_export(profile);
        objects::put_object(store.root(), &key, text.as_bytes())?;
        info!(key, "summary saved");
    }
    write!(out, "{text}")?;
    Ok(())
}

/// Append one new log entry.
pub fn record(
    store: &dyn LogStore,
    profile: &ProfileId,
    symptoms: &[String],
    linked_conditions: &[String],
    notes: Option<&str>,
) -> Result<SymptomLog> {
    if symptoms.is_empty() {
        return Err(eyre::eyre!("at least one --symptom is required"));
    }
    let log = SymptomLog {
        id: Some(Uuid::new_v4()),
        profile_id: profile.clone(),
        symptoms: symptoms.to_vec(),
        linked_conditions: linked_conditions.to_vec(),
        notes: notes.map(str::to_string),
        logged_at: Some(jiff::Timestamp::now()),
    };
    store.append_logs(std::slice::from_ref(&log))?;
    Ok(log)
}

/// Append every entry of an exported JSON array.
pub fn import(store: &dyn LogStore, path: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let logs = parse_logs(&contents).wrap_err("export is not a JSON array of symptom logs")?;
    store.append_logs(&logs)?;
    info!(path = %path.display(), imported = logs.len(), "logs imported");
    Ok(logs.len())
}

/// Run the rating-support predicate on raw input.
pub fn check(percent: i64, supported: &str, out: &mut impl Write) -> Result<bool> {
    let rating = SupportedRating::parse(supported);
    let covered = is_rating_supported(percent, &rating);
    writeln!(out, "{percent}% within {rating}: {covered}")?;
    Ok(covered)
}
