//! ctestgen-core
//!
//! Core library for finding C functions without unit tests and generating
//! Unity test stubs for them.
//!
//! The engine is a lexical analyzer, not a compiler front end: functions are
//! recognized line by line with a signature pattern, and coverage is a loose
//! name correlation against identifiers found in test sources.
//!
//! All substantive logic lives here so it is testable and reusable from both
//! CLI entry points (`detect` and `generate`).

pub mod analysis;
pub mod coverage;
pub mod extract;
pub mod model;
pub mod project;
pub mod stubs;
pub mod walk;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
