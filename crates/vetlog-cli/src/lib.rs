//! vetlog-cli library root.
//!
//! Re-exports internal modules so that integration tests can drive the
//! commands and the config layer without spawning the binary.

pub mod commands;
pub mod config;
