use vetlog_core::models::analysis::MetricValue;
use vetlog_core::models::log::SymptomLog;
use vetlog_core::models::profile::ProfileId;
use vetlog_core::models::rating::SupportedRating;
use vetlog_ratings::conditions::ankle_achilles::analyze_ankle_achilles;

fn vet() -> ProfileId {
    ProfileId::from("vet-1")
}

fn logs(n: usize, symptoms: &[&str]) -> Vec<SymptomLog> {
    (0..n).map(|_| SymptomLog::new("vet-1", symptoms)).collect()
}

#[test]
fn empty_input_has_no_data_and_no_gaps() {
    let result = analyze_ankle_achilles(&[], &vet());
    assert!(!result.has_data);
    assert_eq!(result.supported_rating, SupportedRating::Absent);
    assert!(result.rationale.is_empty());
    assert!(result.evidence_gaps.is_empty());
    assert!(result.metrics.is_empty());
}

#[test]
fn irrelevant_logs_yield_single_gap() {
    let logs = vec![
        SymptomLog::new("vet-1", &["headache"]),
        SymptomLog::new("someone-else", &["ankle pain"]),
    ];
    let result = analyze_ankle_achilles(&logs, &vet());
    assert!(!result.has_data);
    assert_eq!(result.supported_rating, SupportedRating::Absent);
    assert!(result.rationale.is_empty());
    assert_eq!(result.evidence_gaps.len(), 1);
    assert!(result.evidence_gaps[0].contains("No Ankle & Achilles"));
    assert!(result.metrics.is_empty());
}

#[test]
fn relevance_is_case_insensitive() {
    let logs = vec![SymptomLog::new("vet-1", &["Ankle Pain"])];
    let result = analyze_ankle_achilles(&logs, &vet());
    assert!(result.has_data);
    assert_eq!(result.metric("totalLogs"), Some(MetricValue::Count(1)));
    assert_eq!(result.metric("painDays"), Some(MetricValue::Count(1)));
}

#[test]
fn linked_condition_tag_makes_log_relevant() {
    let logs = vec![SymptomLog::new("vet-1", &["stiffness"]).with_linked_condition("ankle_achilles")];
    let result = analyze_ankle_achilles(&logs, &vet());
    assert!(result.has_data);
    assert_eq!(result.metric("limitedROM"), Some(MetricValue::Count(1)));
}

#[test]
fn frozen_ankle_wins_over_every_lower_rule() {
    let logs = logs(10, &["frozen ankle", "ankle pain", "stiff", "swelling"]);
    let result = analyze_ankle_achilles(&logs, &vet());
    assert_eq!(result.supported_rating, SupportedRating::from(40));
    assert_eq!(result.rationale.len(), 1);
    assert!(result.rationale[0].contains("Frozen ankle"));
}

#[test]
fn bare_frozen_logs_are_not_ankle_logs() {
    let bare = logs(10, &["frozen"]);
    let result = analyze_ankle_achilles(&bare, &vet());
    assert!(!result.has_data);
    assert_eq!(result.supported_rating, SupportedRating::Absent);

    let tagged: Vec<SymptomLog> = bare
        .into_iter()
        .map(|log| log.with_linked_condition("ankle_achilles"))
        .collect();
    let result = analyze_ankle_achilles(&tagged, &vet());
    assert_eq!(result.supported_rating, SupportedRating::from(40));
    assert!(result.rationale[0].contains("Frozen ankle"));
}

#[test]
fn headache_is_not_an_ankle_pain_day() {
    let logs = logs(10, &["ankle swelling", "headache"]);
    let result = analyze_ankle_achilles(&logs, &vet());
    assert_eq!(result.metric("painDays"), Some(MetricValue::Count(0)));
    assert_eq!(result.metric("flareUps"), Some(MetricValue::Count(10)));
    assert_eq!(result.supported_rating, SupportedRating::from(20));
}

#[test]
fn half_of_logs_limited_rates_thirty() {
    let mut logs = logs(5, &["ankle stiffness"]);
    logs.extend((0..5).map(|_| SymptomLog::new("vet-1", &["ankle aching"])));
    let result = analyze_ankle_achilles(&logs, &vet());
    assert_eq!(result.metric("limitedROM"), Some(MetricValue::Count(5)));
    assert_eq!(result.metric("frozen"), Some(MetricValue::Count(0)));
    assert_eq!(result.supported_rating, SupportedRating::from(30));
}

#[test]
fn thirty_percent_limited_rates_twenty() {
    let mut logs = logs(3, &["ankle limited motion"]);
    logs.extend((0..7).map(|_| SymptomLog::new("vet-1", &["achilles tightness"])));
    let result = analyze_ankle_achilles(&logs, &vet());
    assert_eq!(result.supported_rating, SupportedRating::from(20));
}

#[test]
fn three_flare_ups_rate_twenty() {
    let mut logs = logs(3, &["ankle swelling"]);
    logs.extend((0..7).map(|_| SymptomLog::new("vet-1", &["ankle check-in"])));
    let result = analyze_ankle_achilles(&logs, &vet());
    assert_eq!(result.metric("flareUps"), Some(MetricValue::Count(3)));
    assert_eq!(result.supported_rating, SupportedRating::from(20));
}

#[test]
fn frequent_pain_rates_ten() {
    let mut logs = logs(4, &["ankle pain"]);
    logs.extend((0..6).map(|_| SymptomLog::new("vet-1", &["ankle check-in"])));
    let result = analyze_ankle_achilles(&logs, &vet());
    assert_eq!(result.supported_rating, SupportedRating::from(10));
}

#[test]
fn no_rule_leaves_zero_without_rationale() {
    let mut logs = logs(1, &["ankle pain"]);
    logs.extend((0..9).map(|_| SymptomLog::new("vet-1", &["ankle check-in"])));
    let result = analyze_ankle_achilles(&logs, &vet());
    assert!(result.has_data);
    assert_eq!(result.supported_rating, SupportedRating::from(0));
    assert!(result.rationale.is_empty());
}

#[test]
fn gaps_are_independent_of_rating() {
    let logs = logs(3, &["frozen ankle"]);
    let result = analyze_ankle_achilles(&logs, &vet());
    assert_eq!(result.supported_rating, SupportedRating::from(40));
    assert!(
        result
            .evidence_gaps
            .iter()
            .any(|gap| gap.contains("Document more occurrences"))
    );
}

#[test]
fn notes_satisfy_measurement_and_device_gaps() {
    let mut logs = logs(10, &["ankle stiff"]);
    logs[0].notes = Some("Dorsiflexion 5 degrees at clinic".to_string());
    logs[1].notes = Some("Wore my BRACE all day".to_string());
    let result = analyze_ankle_achilles(&logs, &vet());
    assert!(result.evidence_gaps.is_empty(), "{:?}", result.evidence_gaps);
    assert_eq!(result.metric("assistiveDevice"), Some(MetricValue::Flag(true)));
}

#[test]
fn missing_symptoms_never_match() {
    let mut log = SymptomLog::new("vet-1", &[]);
    log.notes = Some("ankle pain".to_string());
    let result = analyze_ankle_achilles(&[log], &vet());
    assert!(!result.has_data);
}

#[test]
fn repeated_analysis_is_identical() {
    let logs = logs(7, &["ankle pain", "stiff"]);
    let first = analyze_ankle_achilles(&logs, &vet());
    let second = analyze_ankle_achilles(&logs, &vet());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
