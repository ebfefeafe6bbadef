use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ctestgen_core::analysis::{Analyzer, ProjectAnalysis};

use crate::canonicalize_or_current;

/// Width of the `=`/`-` rules framing report sections.
pub const RULE_WIDTH: usize = 80;

/// Resolve `root` and run extraction plus correlation with the default engine policy.
pub fn analyze_root(root: &str) -> Result<(PathBuf, Analyzer, ProjectAnalysis)> {
    let root_path = canonicalize_or_current(root)?;
    let analyzer = Analyzer::default();
    let analysis = analyzer
        .analyze_root(&root_path)
        .with_context(|| format!("Failed to analyze project at {}", root_path.display()))?;
    Ok((root_path, analyzer, analysis))
}

/// Print a titled banner framed by `=` rules.
pub fn print_banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Display `path` relative to `root` when possible.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
