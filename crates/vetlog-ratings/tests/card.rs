use vetlog_core::models::log::SymptomLog;
use vetlog_core::models::profile::ProfileId;
use vetlog_ratings::card::{RatingCard, build_cards};
use vetlog_ratings::conditions::ankle_achilles::AnkleAchilles;
use vetlog_ratings::criteria::RatingCriterion;
use vetlog_ratings::{Condition, secondary};

#[test]
fn card_highlights_the_supported_row() {
    let vet = ProfileId::from("vet");
    let logs: Vec<SymptomLog> = (0..10)
        .map(|_| SymptomLog::new("vet", &["ankle stiff"]))
        .collect();
    let analysis = AnkleAchilles.analyze(&logs, &vet);
    let card = RatingCard::build(&AnkleAchilles, analysis);

    assert_eq!(card.rows.len(), AnkleAchilles.criteria().len());
    let supported: Vec<i64> = card.rows.iter().filter(|r| r.supported).map(|r| r.percent).collect();
    assert_eq!(supported, vec![30]);
    assert_eq!(card.supported_row().map(|r| r.percent), Some(30));
    assert!(!card.secondary.is_empty());
}

#[test]
fn cards_skip_conditions_without_data() {
    let vet = ProfileId::from("vet");
    let logs = vec![
        SymptomLog::new("vet", &["ankle pain"]),
        SymptomLog::new("vet", &["neck stiffness"]),
        SymptomLog::new("other", &["migraine"]),
    ];
    let cards = build_cards(&logs, &vet);
    let ids: Vec<&str> = cards.iter().map(|c| c.condition_id.as_str()).collect();
    assert_eq!(ids, vec!["ankle_achilles", "cervical_spine"]);
}

#[test]
fn criteria_tables_descend() {
    for condition in vetlog_ratings::all_conditions() {
        let rows: &[RatingCriterion] = condition.criteria();
        for pair in rows.windows(2) {
            assert!(pair[0].percent > pair[1].percent, "{}", condition.id());
        }
    }
}

#[test]
fn unknown_condition_has_no_secondaries() {
    assert!(secondary::for_condition("nope").is_empty());
    assert!(!secondary::for_condition("tinnitus").is_empty());
}
