use anyhow::Result;
use serde::Serialize;

use ctestgen_core::analysis::ProjectAnalysis;
use ctestgen_core::model::FunctionRecord;
use ctestgen_core::stubs::render_quick_stub;

use crate::commands::{analyze_root, print_banner, ExitCode, RULE_WIDTH};
use crate::infer_project_name;

/// How many quick stubs the text report prints before summarizing the rest.
pub const QUICK_STUB_LIMIT: usize = 5;

/// Machine-readable form of the detector report.
#[derive(Debug, Serialize)]
pub struct DetectReport {
    pub project: String,
    pub root: String,
    pub source_dir: String,
    pub test_dir: String,
    pub total: usize,
    pub tested: usize,
    pub untested: usize,
    pub untested_functions: Vec<FunctionRecord>,
}

impl DetectReport {
    pub fn from_analysis(analysis: &ProjectAnalysis) -> Self {
        let layout = &analysis.layout;
        let classification = &analysis.classification;
        Self {
            project: infer_project_name(&layout.root),
            root: layout.root.display().to_string(),
            source_dir: layout.source_dir.display().to_string(),
            test_dir: layout.test_dir.display().to_string(),
            total: classification.total,
            tested: classification.tested.len(),
            untested: classification.untested.len(),
            untested_functions: classification.untested.clone(),
        }
    }
}

/// Report functions without tests.
///
/// Coverage is a loose name heuristic: a function counts as tested when its name
/// and a `test_*` identifier contain one another. Returns `UntestedFound` when
/// any public function is left uncovered.
pub fn detect_command(root: &str, json: bool) -> Result<ExitCode> {
    let (_root_path, _analyzer, analysis) = analyze_root(root)?;
    let report = DetectReport::from_analysis(&analysis);
    let exit = if report.untested > 0 { ExitCode::UntestedFound } else { ExitCode::Success };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(exit);
    }

    print_banner("Feature Implementation Detector");
    println!("Analyzing project: {}", report.root);
    println!("Source directory: {}", report.source_dir);
    println!("Test directory: {}", report.test_dir);
    println!();

    println!("Total functions found: {}", report.total);
    println!("Functions with tests: {}", report.tested);
    println!("Functions without tests: {}", report.untested);
    println!();

    if report.untested_functions.is_empty() {
        println!("All public functions have tests!");
        return Ok(exit);
    }

    println!("Functions without tests:");
    println!("{}", "-".repeat(RULE_WIDTH));
    for func in &report.untested_functions {
        println!("  • {:<30} ({})", func.name, func.return_type);
        println!("    Location: {}", func.location());
    }
    println!();

    print_banner("Generated Test Stubs (copy to test file):");
    for func in report.untested_functions.iter().take(QUICK_STUB_LIMIT) {
        println!();
        print!("{}", render_quick_stub(func));
    }
    if report.untested > QUICK_STUB_LIMIT {
        println!();
        println!("... and {} more functions need tests.", report.untested - QUICK_STUB_LIMIT);
    }

    Ok(exit)
}
