use serde_json::json;
use vetlog_core::models::log::SymptomLog;
use vetlog_core::models::profile::{ProfileId, ProfileType};
use vetlog_export::error::ExportError;
use vetlog_export::render::{render_summary, render_template};
use vetlog_ratings::card::build_cards;

fn frozen_ankle_cards() -> Vec<vetlog_ratings::card::RatingCard> {
    let logs: Vec<SymptomLog> = (0..3)
        .map(|_| SymptomLog::new("vet", &["frozen ankle"]))
        .collect();
    build_cards(&logs, &ProfileId::from("vet"))
}

#[test]
fn summary_lists_rating_rationale_and_gaps() {
    let text = render_summary(&frozen_ankle_cards(), ProfileType::Veteran).unwrap();
    assert!(text.contains("== Ankle & Achilles (DC 5270, 5271, 5272, 5273, 5274) =="));
    assert!(text.contains("Supported rating: 40%"));
    assert!(text.contains("  >> 40%"));
    assert!(text.contains("Frozen ankle (ankylosis) documented"));
    assert!(text.contains("Document more occurrences"));
    assert!(text.contains("Possible secondary conditions:"));
    assert!(text.contains("your symptom logs (veteran profile)"));
    assert!(text.contains("not a VA decision"));
}

#[test]
fn caregiver_wording() {
    let text = render_summary(&frozen_ankle_cards(), ProfileType::Caregiver).unwrap();
    assert!(text.contains("the veteran's symptom logs (caregiver profile)"));
}

#[test]
fn empty_summary_says_so() {
    let text = render_summary(&[], ProfileType::Veteran).unwrap();
    assert!(text.contains("No condition has logged evidence yet."));
}

#[test]
fn custom_template_renders_context() {
    let text = render_template("t.txt", "{{ name }}: {{ rating }}%", &json!({"name": "Knee", "rating": 10}))
        .unwrap();
    assert_eq!(text, "Knee: 10%");
}

#[test]
fn bad_template_is_a_parse_error() {
    let err = render_template("t.txt", "{% if %}", &json!({})).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn missing_variable_is_a_render_error() {
    let err = render_template("t.txt", "{{ nope }}", &json!({})).unwrap_err();
    assert!(matches!(err, ExportError::TemplateRender(_)));
}
