//! Key conventions for the on-device store.
//!
//! Pure string functions. These define the canonical layout of objects in
//! the local data directory; the storage crate treats them as opaque keys.

use crate::models::profile::ProfileId;

/// Every symptom log for every profile, as one JSON array.
pub const SYMPTOM_LOGS: &str = "symptom-logs.json";

pub const EXPORTS_PREFIX: &str = "exports/";

pub fn summary_export(id: &ProfileId) -> String {
    format!("{EXPORTS_PREFIX}{id}/summary.txt")
}
