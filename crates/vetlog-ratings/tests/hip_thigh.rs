use vetlog_core::models::analysis::MetricValue;
use vetlog_core::models::log::SymptomLog;
use vetlog_core::models::profile::ProfileId;
use vetlog_core::models::rating::SupportedRating;
use vetlog_ratings::conditions::hip_thigh::analyze_hip_thigh;

fn vet() -> ProfileId {
    ProfileId::from(7u64)
}

fn logs(n: usize, symptoms: &[&str]) -> Vec<SymptomLog> {
    (0..n).map(|_| SymptomLog::new(7u64, symptoms)).collect()
}

#[test]
fn frozen_hip_rates_sixty() {
    let mut logs = logs(9, &["hip pain"]);
    logs.push(SymptomLog::new(7u64, &["Hip feels frozen"]));
    let result = analyze_hip_thigh(&logs, &vet());
    assert_eq!(result.supported_rating, SupportedRating::from(60));
}

#[test]
fn limited_motion_with_device_rates_forty() {
    let mut logs = logs(6, &["hip stiffness"]);
    logs.extend((0..4).map(|_| SymptomLog::new(7u64, &["thigh pain"])));
    logs[0].notes = Some("needed my cane to get upstairs".to_string());
    let result = analyze_hip_thigh(&logs, &vet());
    assert_eq!(result.metric("assistiveDevice"), Some(MetricValue::Flag(true)));
    assert_eq!(result.supported_rating, SupportedRating::from(40));
}

#[test]
fn limited_motion_without_device_rates_thirty() {
    let mut logs = logs(6, &["hip stiffness"]);
    logs.extend((0..4).map(|_| SymptomLog::new(7u64, &["thigh pain"])));
    let result = analyze_hip_thigh(&logs, &vet());
    assert_eq!(result.supported_rating, SupportedRating::from(30));
    assert!(
        result
            .evidence_gaps
            .iter()
            .any(|gap| gap.contains("assistive device"))
    );
}

#[test]
fn groin_pain_is_relevant() {
    let logs = logs(2, &["GROIN pain"]);
    let result = analyze_hip_thigh(&logs, &vet());
    assert!(result.has_data);
    assert_eq!(result.metric("painDays"), Some(MetricValue::Count(2)));
    assert_eq!(result.supported_rating, SupportedRating::from(10));
}

#[test]
fn flare_up_gap_clears_once_logged() {
    let mut logs = logs(10, &["hip pain"]);
    logs[3].symptoms.push("hip flare".to_string());
    let result = analyze_hip_thigh(&logs, &vet());
    assert!(
        !result
            .evidence_gaps
            .iter()
            .any(|gap| gap.contains("No flare-ups"))
    );
}

#[test]
fn string_and_numeric_profile_ids_match() {
    let logs = vec![SymptomLog::new("7", &["hip pain"])];
    assert!(analyze_hip_thigh(&logs, &vet()).has_data);
}
