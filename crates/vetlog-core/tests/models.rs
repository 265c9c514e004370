use serde_json::json;
use vetlog_core::models::analysis::{AnalysisResult, MetricValue};
use vetlog_core::models::log::{SymptomLog, parse_logs};
use vetlog_core::models::profile::{ProfileId, ProfileType};
use vetlog_core::models::rating::SupportedRating;

#[test]
fn log_accepts_numeric_profile_id() {
    let log: SymptomLog = serde_json::from_value(json!({
        "profileId": 42,
        "symptoms": ["Ankle pain"],
    }))
    .unwrap();
    assert_eq!(log.profile_id, ProfileId::from(42u64));
    assert_eq!(log.profile_id, ProfileId::from("42"));
}

#[test]
fn log_tolerates_missing_and_null_fields() {
    let log: SymptomLog = serde_json::from_value(json!({
        "profileId": "p1",
        "symptoms": null,
    }))
    .unwrap();
    assert!(log.symptoms.is_empty());
    assert!(log.linked_conditions.is_empty());
    assert_eq!(log.notes(), "");
    assert!(log.id.is_none());
}

#[test]
fn parse_logs_reads_an_array() {
    let logs = parse_logs(
        r#"[
            {"profileId": "p1", "symptoms": ["hip pain"], "linkedConditions": ["hip-thigh"], "notes": "used cane"},
            {"profileId": "p2"}
        ]"#,
    )
    .unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].linked_conditions, vec!["hip-thigh".to_string()]);
    assert_eq!(logs[0].notes(), "used cane");
}

#[test]
fn parse_logs_rejects_non_arrays() {
    assert!(parse_logs(r#"{"profileId": "p1"}"#).is_err());
}

#[test]
fn profile_id_rejects_blank_input() {
    assert!(ProfileId::parse("   ").is_err());
    assert_eq!(ProfileId::parse(" vet-1 ").unwrap().as_str(), "vet-1");
}

#[test]
fn profile_type_round_trips_through_text() {
    assert_eq!("Caregiver".parse::<ProfileType>().unwrap(), ProfileType::Caregiver);
    assert_eq!(ProfileType::default(), ProfileType::Veteran);
    assert!("spouse".parse::<ProfileType>().is_err());
}

#[test]
fn analysis_result_serializes_camel_case() {
    let mut result = AnalysisResult::empty();
    result.has_data = true;
    result.supported_rating = SupportedRating::from(10);
    result.metrics.insert("totalLogs".to_string(), MetricValue::Count(3));
    result.metrics.insert("assistiveDevice".to_string(), MetricValue::Flag(false));

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "hasData": true,
            "supportedRating": 10,
            "rationale": [],
            "evidenceGaps": [],
            "metrics": {"assistiveDevice": false, "totalLogs": 3},
        })
    );
}

#[test]
fn no_relevant_logs_has_single_gap() {
    let result = AnalysisResult::no_relevant_logs("nothing logged");
    assert!(!result.has_data);
    assert!(result.supported_rating.is_absent());
    assert_eq!(result.evidence_gaps, vec!["nothing logged".to_string()]);
    assert!(result.metrics.is_empty());
}
