use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::profile::ProfileId;

/// One symptom diary entry. Owned by the persistence layer; analyzers only
/// read it.
///
/// Every field except `profile_id` tolerates being absent or `null` so that
/// entries written by older front-ends still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SymptomLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub profile_id: ProfileId,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[ts(type = "Array<string>")]
    pub symptoms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[ts(type = "Array<string>")]
    pub linked_conditions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<jiff::Timestamp>,
}

impl SymptomLog {
    pub fn new(profile_id: impl Into<ProfileId>, symptoms: &[&str]) -> Self {
        Self {
            id: None,
            profile_id: profile_id.into(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            linked_conditions: Vec::new(),
            notes: None,
            logged_at: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_linked_condition(mut self, tag: impl Into<String>) -> Self {
        self.linked_conditions.push(tag.into());
        self
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }
}

/// Parse an exported log collection (a JSON array of entries).
pub fn parse_logs(json: &str) -> Result<Vec<SymptomLog>, CoreError> {
    Ok(serde_json::from_str(json)?)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
