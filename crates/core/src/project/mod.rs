//! Project configuration and on-disk layout.
//!
//! - `EngineConfig`: the fixed exclusion policy the engine runs under.
//! - `ProjectConfig`: optional `ctestgen.json` naming the source and test dirs.
//! - `ProjectLayout`: computed paths for a project root.

pub mod config;
pub mod layout;

pub use config::*;
pub use layout::*;
