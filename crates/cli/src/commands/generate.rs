use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::commands::{analyze_root, display_relative, print_banner};

/// One stub file written (or, in dry-run mode, planned) by `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub module: String,
    pub path: PathBuf,
    pub functions: usize,
}

/// Generate `test_<module>_auto.c` stub files for every untested public function.
///
/// The extraction and correlation are re-run here rather than read from a
/// previous `detect`. Existing generated files for the same module are overwritten.
pub fn generate_command(root: &str, dry_run: bool) -> Result<Vec<GeneratedFile>> {
    let (root_path, analyzer, analysis) = analyze_root(root)?;

    print_banner("Auto Test Generator");
    println!("Analyzing project: {}", root_path.display());
    println!();

    let untested = analysis.untested();
    if untested.is_empty() {
        println!("All functions have tests!");
        return Ok(Vec::new());
    }
    println!("Found {} untested functions", untested.len());
    println!();

    let layout = &analysis.layout;
    let extension = &analyzer.config().source_extension;
    let modules = analyzer.generate(&analysis);

    if !dry_run {
        fs::create_dir_all(&layout.test_dir).with_context(|| {
            format!("Failed to create test dir: {}", layout.test_dir.display())
        })?;
    }

    let mut written = Vec::new();
    for module in modules {
        let path = layout.generated_test_path(&module.name, extension);
        let shown = display_relative(&path, &layout.root);

        if dry_run {
            println!("Would generate {} with {} test functions", shown, module.plans.len());
        } else {
            println!("Generating {} with {} test functions...", shown, module.plans.len());
            fs::write(&path, &module.text)
                .with_context(|| format!("Failed to write generated tests: {}", path.display()))?;
            info!(path = %path.display(), tests = module.test_names().len(), "Wrote stub module");
            println!("  Generated {}", shown);
        }

        written.push(GeneratedFile { module: module.name, path, functions: module.plans.len() });
    }

    if dry_run {
        return Ok(written);
    }

    println!();
    print_banner("Test generation complete!");
    println!();
    println!("Next steps:");
    println!("1. Review generated test files and implement the TODO items");
    println!("2. Add necessary #include directives");
    println!(
        "3. Update {}/CMakeLists.txt to include new test files",
        display_relative(&layout.test_dir, &layout.root)
    );
    println!("4. Build and run tests with: idf.py build");

    Ok(written)
}
