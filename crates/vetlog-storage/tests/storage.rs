use serde::{Deserialize, Serialize};
use vetlog_core::keys;
use vetlog_core::models::log::SymptomLog;
use vetlog_storage::error::StorageError;
use vetlog_storage::logs::{FileLogStore, LogStore};
use vetlog_storage::{objects, state};

#[test]
fn missing_object_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = objects::get_object(dir.path(), "nothing.json").unwrap_err();
    assert!(matches!(err, StorageError::NotFound { key } if key == "nothing.json"));
}

#[test]
fn put_then_get_nested_key() {
    let dir = tempfile::tempdir().unwrap();
    objects::put_object(dir.path(), "exports/p1/summary.txt", b"hello").unwrap();
    assert_eq!(
        objects::get_object(dir.path(), "exports/p1/summary.txt").unwrap(),
        b"hello"
    );
    assert!(!dir.path().join("exports/p1/summary.txt.tmp").exists());
}

#[test]
fn keys_cannot_escape_the_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    for key in ["", "../outside.json", "/etc/passwd", "a/../../b"] {
        let err = objects::put_object(dir.path(), key, b"x").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }), "{key:?}");
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Settings {
    high_contrast: bool,
}

#[test]
fn state_defaults_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let settings: Settings = state::load_state_or_default(dir.path(), "settings.json").unwrap();
    assert_eq!(settings, Settings::default());

    state::save_state(dir.path(), "settings.json", &Settings { high_contrast: true }).unwrap();
    let settings: Settings = state::load_state(dir.path(), "settings.json").unwrap();
    assert!(settings.high_contrast);
}

#[test]
fn corrupt_state_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    objects::put_object(dir.path(), keys::SYMPTOM_LOGS, b"{not json").unwrap();
    let store = FileLogStore::new(dir.path());
    assert!(matches!(store.load_logs(), Err(StorageError::Serialization(_))));
}

#[test]
fn log_store_starts_empty_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileLogStore::new(dir.path());
    assert!(store.load_logs().unwrap().is_empty());

    let total = store
        .append_logs(&[SymptomLog::new("p1", &["ankle pain"])])
        .unwrap();
    assert_eq!(total, 1);
    let total = store
        .append_logs(&[
            SymptomLog::new("p1", &["hip stiffness"]).with_notes("cane"),
            SymptomLog::new("p2", &["tinnitus"]),
        ])
        .unwrap();
    assert_eq!(total, 3);

    let logs = store.load_logs().unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[1].notes(), "cane");
    assert_eq!(logs[2].profile_id.as_str(), "p2");
}

#[test]
fn reads_logs_written_by_the_web_app() {
    let dir = tempfile::tempdir().unwrap();
    objects::put_object(
        dir.path(),
        keys::SYMPTOM_LOGS,
        br#"[{"profileId": 3, "symptoms": ["Neck pain"], "linkedConditions": null}]"#,
    )
    .unwrap();
    let logs = FileLogStore::new(dir.path()).load_logs().unwrap();
    assert_eq!(logs[0].profile_id.as_str(), "3");
    assert!(logs[0].linked_conditions.is_empty());
}
