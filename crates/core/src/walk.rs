//! Recursive discovery of source files.
//!
//! Uses `ignore::WalkBuilder` with every ignore filter switched off: a C
//! project's tests are often generated into gitignored directories and must
//! still be seen. Entries are sorted by file name at each level so the visit
//! order, and therefore every downstream report, is deterministic.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::warn;

/// Collect every regular file under `root` whose extension is `extension`.
///
/// A missing `root` yields an empty list. Entries the walker cannot read are
/// logged and skipped.
pub fn files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false).sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };
        let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(entry.into_path());
        }
    }
    files
}
