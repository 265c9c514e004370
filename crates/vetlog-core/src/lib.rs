//! vetlog-core
//!
//! Pure domain types and on-device key conventions. No I/O — this is the
//! shared vocabulary of the symptom log and the rating analyzers.

pub mod error;
pub mod keys;
pub mod models;
