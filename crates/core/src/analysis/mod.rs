//! Project-level driver shared by the `detect` and `generate` entry points.
//!
//! Resolves the project layout, runs the extractor over the source tree and
//! correlates the result against the test tree. Stub generation reuses the
//! same analysis instead of consuming a serialized intermediate.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::coverage::{Classification, Correlator};
use crate::extract::Extractor;
use crate::model::FunctionRecord;
use crate::project::{load_project_config, ConfigError, EngineConfig, ProjectLayout};
use crate::stubs::{GeneratedModule, StubGenerator};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Project root not found at {0}")]
    MissingRoot(PathBuf),
    #[error("Project root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Everything one analysis run knows about a project.
#[derive(Debug, Clone)]
pub struct ProjectAnalysis {
    pub layout: ProjectLayout,
    /// All extracted functions in scan order, static ones included.
    pub functions: Vec<FunctionRecord>,
    pub classification: Classification,
}

impl ProjectAnalysis {
    pub fn untested(&self) -> &[FunctionRecord] {
        &self.classification.untested
    }
}

/// Runs extraction, correlation and stub generation under one `EngineConfig`.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: EngineConfig,
}

impl Analyzer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate `root`, load its optional `ctestgen.json` and analyze it.
    pub fn analyze_root(&self, root: &Path) -> Result<ProjectAnalysis, AnalysisError> {
        if !root.exists() {
            return Err(AnalysisError::MissingRoot(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(AnalysisError::NotADirectory(root.to_path_buf()));
        }
        let project_config = load_project_config(root)?;
        let layout = ProjectLayout::new(root, &project_config);
        Ok(self.analyze_layout(&layout))
    }

    /// Analyze an already-resolved layout.
    ///
    /// A missing source directory is logged and yields no functions; a missing
    /// test directory means there are no existing tests.
    pub fn analyze_layout(&self, layout: &ProjectLayout) -> ProjectAnalysis {
        if !layout.source_dir.is_dir() {
            warn!("Source directory {} does not exist", layout.source_dir.display());
        }

        let functions = Extractor::new(self.config.clone()).scan(&layout.source_dir);
        let classification =
            Correlator::new(self.config.clone()).classify(&functions, &layout.test_dir);
        debug!(
            total = classification.total,
            tested = classification.tested.len(),
            untested = classification.untested.len(),
            "Classified project functions"
        );

        ProjectAnalysis { layout: layout.clone(), functions, classification }
    }

    /// Generate stub modules for every untested public function of `analysis`.
    pub fn generate(&self, analysis: &ProjectAnalysis) -> Vec<GeneratedModule> {
        StubGenerator::new(self.config.clone()).generate(analysis.untested())
    }
}
