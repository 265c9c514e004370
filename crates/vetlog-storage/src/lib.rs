//! vetlog-storage
//!
//! On-device key-value storage. A data directory holds one file per key;
//! the analyzers only ever read symptom logs out of it.

pub mod error;
pub mod logs;
pub mod objects;
pub mod state;
