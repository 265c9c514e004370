//! vetlog-export
//!
//! Plain-text rating summaries rendered from rating cards.

pub mod error;
pub mod render;
