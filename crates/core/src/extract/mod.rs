//! Lexical extraction of C function definitions.
//!
//! There is no parser here. Each line is matched independently against a
//! single-line signature grammar anchored at column 0:
//!
//! ```text
//! [static] [inline] [const] <type>[*] <name>(<params>) { | ;
//! ```
//!
//! The grammar is matched against the raw line, not the trimmed one, so an
//! indented signature is never detected. Only the comment/directive filter
//! looks at the trimmed line. Matching trimmed lines would turn indented
//! statements such as `return foo(x);` or `} else if (x) {` into records.
//!
//! Known gap: a return type placed alone on the line above the name
//! (`static int\nfoo(void)`) is not detected either.

pub mod signature;

use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::model::{FunctionRecord, Signature};
use crate::project::EngineConfig;
use crate::walk;

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:static\s+)?(?:inline\s+)?(?:const\s+)?(\w+(?:\s*\*)?)\s+(\w+)\s*\([^)]*\)\s*(?:\{|;)",
    )
    .expect("valid regex")
});

/// Match a single source line against the signature grammar.
///
/// Returns the captured `(return_type, name)` without applying any exclusion policy.
pub fn match_signature_line(line: &str) -> Option<(String, String)> {
    let caps = FUNCTION_RE.captures(line)?;
    Some((caps[1].trim().to_string(), caps[2].trim().to_string()))
}

/// True if `line` is a pure line comment or a preprocessor directive.
fn is_comment_or_directive(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//") || trimmed.starts_with('#')
}

/// Names like `Config_t` are type aliases that slipped through the grammar.
fn looks_like_type_alias(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase) && name.ends_with("_t")
}

/// Scans production sources for function records under a fixed `EngineConfig`.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: EngineConfig,
}

impl Extractor {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Walk `source_dir` and extract functions from every production source file.
    ///
    /// Files whose path below `source_dir` mentions the test token are skipped.
    /// A file that cannot be read is logged and contributes nothing.
    pub fn scan(&self, source_dir: &Path) -> Vec<FunctionRecord> {
        let token = self.config.test_path_token.to_lowercase();
        let mut functions = Vec::new();

        for path in walk::files_with_extension(source_dir, &self.config.source_extension) {
            let relative = path.strip_prefix(source_dir).unwrap_or(&path);
            if relative.to_string_lossy().to_lowercase().contains(&token) {
                debug!("Skipping test-like source {}", path.display());
                continue;
            }

            match self.scan_file(&path) {
                Ok(found) => {
                    debug!("Found {} functions in {}", found.len(), path.display());
                    functions.extend(found);
                }
                Err(err) => warn!("Error reading {}: {}", path.display(), err),
            }
        }

        functions
    }

    /// Extract functions from a single file on disk.
    pub fn scan_file(&self, path: &Path) -> io::Result<Vec<FunctionRecord>> {
        let bytes = fs::read(path)?;
        Ok(self.extract_from_source(path, &String::from_utf8_lossy(&bytes)))
    }

    /// Extract functions from in-memory `source`, attributing them to `path`.
    pub fn extract_from_source(&self, path: &Path, source: &str) -> Vec<FunctionRecord> {
        let mut functions = Vec::new();

        for (idx, line) in source.lines().enumerate() {
            if is_comment_or_directive(line) {
                continue;
            }
            let Some((return_type, name)) = match_signature_line(line) else {
                continue;
            };
            if self.config.is_excluded(&name) || looks_like_type_alias(&name) {
                continue;
            }

            let record = FunctionRecord::new(name, return_type, path, idx + 1)
                .with_static(line.contains("static"));
            functions.push(record);
        }

        functions
    }

    /// On-demand signature pass for a previously extracted record.
    pub fn signature(&self, record: &FunctionRecord) -> Signature {
        signature::read_signature(
            &record.source_file,
            record.line_number,
            self.config.signature_lookahead,
        )
    }
}
