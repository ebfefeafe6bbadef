//! Correlation of extracted functions against names found in test sources.
//!
//! Coverage here is a name heuristic, not an execution measurement. A function
//! counts as covered when its name is a substring of a test-name candidate or
//! a candidate is a substring of its name. The rule is deliberately loose and
//! produces false positives (`hash` is covered by `test_hashmap_insert`);
//! tightening it changes reported coverage.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::FunctionRecord;
use crate::project::EngineConfig;
use crate::walk;

static TEST_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)test_(\w+)").expect("valid regex"));

/// Set of identifiers considered "tested", derived from test sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestNameIndex {
    names: BTreeSet<String>,
}

impl TestNameIndex {
    /// Build the index from every test source under `test_dir`.
    ///
    /// A missing directory yields an empty index; unreadable files are logged and skipped.
    pub fn scan(test_dir: &Path, extension: &str) -> Self {
        let mut index = Self::default();
        if !test_dir.is_dir() {
            debug!("Test directory {} does not exist; no existing tests", test_dir.display());
            return index;
        }

        for path in walk::files_with_extension(test_dir, extension) {
            match fs::read(&path) {
                Ok(bytes) => index.insert_source(&String::from_utf8_lossy(&bytes)),
                Err(err) => warn!("Error reading test file {}: {}", path.display(), err),
            }
        }
        debug!("Indexed {} test-name candidates from {}", index.len(), test_dir.display());
        index
    }

    /// Build the index from the text of a single test source.
    pub fn from_source(source: &str) -> Self {
        let mut index = Self::default();
        index.insert_source(source);
        index
    }

    /// Build the index from already-captured test names (the text after `test_`).
    pub fn from_test_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for name in names {
            index.insert_test_name(name.as_ref());
        }
        index
    }

    fn insert_source(&mut self, source: &str) {
        for caps in TEST_NAME_RE.captures_iter(source) {
            self.insert_test_name(&caps[1]);
        }
    }

    /// Register `name` and every right-aligned suffix of its `_`-separated parts.
    fn insert_test_name(&mut self, name: &str) {
        self.names.insert(name.to_string());
        if !name.contains('_') {
            return;
        }
        let parts: Vec<&str> = name.split('_').collect();
        for start in 1..parts.len() {
            self.names.insert(parts[start..].join("_"));
        }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.names.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Bidirectional substring match of `function_name` against every candidate.
    pub fn covers(&self, function_name: &str) -> bool {
        self.names
            .iter()
            .any(|tested| tested.contains(function_name) || function_name.contains(tested.as_str()))
    }
}

/// Outcome of correlating a scan against the test index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Every extracted function, static ones included.
    pub total: usize,
    /// Distinct names judged covered.
    pub covered: BTreeSet<String>,
    /// Covered functions in scan order, static ones included.
    pub tested: Vec<FunctionRecord>,
    /// Uncovered non-static functions in scan order.
    pub untested: Vec<FunctionRecord>,
}

impl Classification {
    pub fn has_untested(&self) -> bool {
        !self.untested.is_empty()
    }
}

/// Classifies function records as tested or untested.
#[derive(Debug, Clone, Default)]
pub struct Correlator {
    config: EngineConfig,
}

impl Correlator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Index the tests under `test_dir` and classify `functions` against them.
    pub fn classify(&self, functions: &[FunctionRecord], test_dir: &Path) -> Classification {
        let index = TestNameIndex::scan(test_dir, &self.config.source_extension);
        self.classify_with_index(functions, &index)
    }

    /// Classify `functions` against a prebuilt index.
    ///
    /// Static functions never land in `untested`, whatever their coverage.
    pub fn classify_with_index(
        &self,
        functions: &[FunctionRecord],
        index: &TestNameIndex,
    ) -> Classification {
        let mut result = Classification { total: functions.len(), ..Default::default() };

        for func in functions {
            if index.covers(&func.name) {
                result.covered.insert(func.name.clone());
                result.tested.push(func.clone());
            } else if !func.is_static {
                result.untested.push(func.clone());
            }
        }

        result
    }
}
