use std::path::{Path, PathBuf};

use super::config::ProjectConfig;

/// Suffix appended to a module name to form its generated test file stem.
pub const GENERATED_SUFFIX: &str = "_auto";

/// Logical layout of a C project on disk.
///
/// This is derived from a chosen root path and a `ProjectConfig`. It does *not*
/// perform any IO itself; the CLI decides what to read and write.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Root directory of the project.
    pub root: PathBuf,
    /// Directory holding production sources (main).
    pub source_dir: PathBuf,
    /// Directory holding existing tests and receiving generated stubs (test).
    pub test_dir: PathBuf,
}

impl ProjectLayout {
    /// Compute the layout for a project rooted at `root`.
    pub fn new(root: impl AsRef<Path>, config: &ProjectConfig) -> Self {
        let root = root.as_ref().to_path_buf();
        let source_dir = root.join(&config.source_dir);
        let test_dir = root.join(&config.test_dir);
        Self { root, source_dir, test_dir }
    }

    /// Path of the generated test file for `module`, e.g. `test/test_display_auto.c`.
    pub fn generated_test_path(&self, module: &str, extension: &str) -> PathBuf {
        self.test_dir.join(format!("test_{module}{GENERATED_SUFFIX}.{extension}"))
    }
}
