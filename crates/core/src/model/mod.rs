//! Core data model for detected C functions and their signatures.
//!
//! Records are produced by the extractor, classified by the correlator and
//! consumed by the stub generator. They are plain values scoped to a single
//! analysis run; nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One detected function definition (or declaration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Function identifier as captured from the source line.
    pub name: String,
    /// Raw return type token, possibly with a trailing pointer marker (`char*`).
    pub return_type: String,
    /// Defining file, as visited by the extractor.
    pub source_file: PathBuf,
    /// 1-based line of the signature's first line.
    pub line_number: usize,
    /// True if `static` appears anywhere on the matched line.
    pub is_static: bool,
}

impl FunctionRecord {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        source_file: impl Into<PathBuf>,
        line_number: usize,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            source_file: source_file.into(),
            line_number,
            is_static: false,
        }
    }

    /// Builder-style setter for the storage-class flag.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// File stem of the defining file; this is the module a generated test file is named after.
    pub fn module_name(&self) -> String {
        module_name_for(&self.source_file)
    }

    /// `file:line` location string used in reports and stub banners.
    pub fn location(&self) -> String {
        format!("{}:{}", self.source_file.display(), self.line_number)
    }
}

/// File stem of `path`, or an empty string when the path has none.
pub fn module_name_for(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or_default().to_string()
}

/// Result of the on-demand signature pass for a single function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Signature lines, trimmed and joined with single spaces.
    pub text: String,
    /// Raw parameter tokens; a lone `void` never appears here.
    pub parameters: Vec<String>,
}

impl Signature {
    pub fn new(text: impl Into<String>, parameters: Vec<String>) -> Self {
        Self { text: text.into(), parameters }
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// True if any parameter token carries a pointer marker.
    pub fn has_pointer_parameter(&self) -> bool {
        self.parameters.iter().any(|p| p.contains('*'))
    }
}
