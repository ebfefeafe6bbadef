use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the optional per-project configuration, looked up at the project root.
pub const PROJECT_CONFIG_FILE: &str = "ctestgen.json";

/// Functions that are framework or runtime entry points, never worth a generated test.
pub const DEFAULT_EXCLUDED_FUNCTIONS: &[&str] = &[
    "main",
    "app_main",
    "setUp",
    "tearDown",
    "vTaskDelay",
    "printf",
    "ESP_LOGI",
    "ESP_LOGW",
    "ESP_LOGE",
];

/// Return types that make a function non-testable by return value.
pub const DEFAULT_NON_TESTABLE_RETURN_TYPES: &[&str] = &["void"];

/// Error type for loading the project configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read project config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse project config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixed policy the analysis engine runs under.
///
/// These are constants of the tool, not user input; they are carried as a value
/// so the extractor, correlator and stub planner can be exercised against other
/// policies in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Names discarded by the extractor even when they match the signature grammar.
    pub excluded_functions: BTreeSet<String>,
    /// Return types for which no return-value stub is generated.
    pub non_testable_return_types: BTreeSet<String>,
    /// Source file extension (without the dot) for both production and test files.
    pub source_extension: String,
    /// Production files whose relative path contains this token (case-insensitive) are skipped.
    pub test_path_token: String,
    /// Maximum number of lines the signature pass reads from a function's first line.
    pub signature_lookahead: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            excluded_functions: DEFAULT_EXCLUDED_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
            non_testable_return_types: DEFAULT_NON_TESTABLE_RETURN_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            source_extension: "c".to_string(),
            test_path_token: "test".to_string(),
            signature_lookahead: 6,
        }
    }
}

impl EngineConfig {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_functions.contains(name)
    }

    pub fn is_testable_return_type(&self, return_type: &str) -> bool {
        !self.non_testable_return_types.contains(return_type)
    }

    /// Replace the exclusion set.
    pub fn with_excluded_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_functions = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Serializable per-project settings, read from `ctestgen.json` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Production sources, relative to the project root.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Test sources (and generated stubs), relative to the project root.
    #[serde(default = "default_test_dir")]
    pub test_dir: String,
}

fn default_source_dir() -> String {
    "main".to_string()
}

fn default_test_dir() -> String {
    "test".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { source_dir: default_source_dir(), test_dir: default_test_dir() }
    }
}

/// Load `ctestgen.json` from `root`, falling back to defaults when the file is absent.
pub fn load_project_config(root: &Path) -> Result<ProjectConfig, ConfigError> {
    let path = root.join(PROJECT_CONFIG_FILE);
    if !path.is_file() {
        return Ok(ProjectConfig::default());
    }
    let body = std::fs::read_to_string(&path)
        .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
    serde_json::from_str(&body).map_err(|source| ConfigError::Parse { path, source })
}
