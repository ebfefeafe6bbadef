use std::collections::BTreeSet;

use super::{StubKind, StubPlan};
use crate::model::{module_name_for, FunctionRecord};

const RULE: &str =
    "// ==============================================================================";

/// Longest signature excerpt shown in a function banner.
const SIGNATURE_EXCERPT: usize = 80;

/// Render a complete Unity test file for `module`.
pub fn render_module(module: &str, plans: &[StubPlan]) -> String {
    let mut out = String::new();
    out.push_str(&render_preamble(plans));

    for plan in plans {
        out.push('\n');
        out.push_str(&render_function(plan));
    }

    out.push('\n');
    out.push_str(&render_runner(module, plans));
    out
}

fn render_preamble(plans: &[StubPlan]) -> String {
    // `main` has no header worth including.
    let headers: BTreeSet<String> = plans
        .iter()
        .map(|plan| module_name_for(&plan.function.source_file))
        .filter(|stem| !stem.is_empty() && stem != "main")
        .collect();

    let mut out = String::new();
    out.push_str("#include <stdbool.h>\n");
    out.push_str("#include <string.h>\n");
    out.push_str("#include <stdint.h>\n");
    out.push_str("#include \"unity.h\"\n");
    for header in &headers {
        out.push_str(&format!("#include \"{header}.h\"\n"));
    }
    out.push('\n');
    out.push_str("void setUp(void)\n{\n    // Setup before each test\n}\n\n");
    out.push_str("void tearDown(void)\n{\n    // Cleanup after each test\n}\n");
    out
}

fn render_function(plan: &StubPlan) -> String {
    let func = &plan.function;
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("// Tests for {}\n", func.name));
    out.push_str(&format!("// Location: {}\n", func.location()));
    out.push_str(&format!("// Signature: {}\n", signature_excerpt(&plan.signature.text)));
    out.push_str(RULE);
    out.push('\n');

    for kind in &plan.kinds {
        out.push('\n');
        out.push_str(&render_stub(*kind, &func.name));
    }
    out
}

fn signature_excerpt(signature: &str) -> String {
    if signature.chars().count() > SIGNATURE_EXCERPT {
        let head: String = signature.chars().take(SIGNATURE_EXCERPT).collect();
        format!("{head}...")
    } else {
        signature.to_string()
    }
}

fn render_stub(kind: StubKind, name: &str) -> String {
    let (title, steps) = match kind {
        StubKind::Valid => (
            format!("Test {name} with valid inputs"),
            vec![
                "Setup valid test data".to_string(),
                format!("Call {name}"),
                "Assert expected behavior".to_string(),
            ],
        ),
        StubKind::EdgeCases => (
            format!("Test {name} with edge cases"),
            vec![
                "Test boundary conditions".to_string(),
                "Test with minimum/maximum values".to_string(),
                "Assert correct handling".to_string(),
            ],
        ),
        StubKind::NullParams => (
            format!("Test {name} with NULL parameters"),
            vec![
                "Test behavior with NULL pointers".to_string(),
                "Ensure function handles NULL gracefully".to_string(),
            ],
        ),
        StubKind::ReturnValue => (
            format!("Test {name} return value"),
            vec![format!("Call {name}"), "Verify return value is correct".to_string()],
        ),
    };

    let mut out = String::new();
    out.push_str(&format!("// {title}\n"));
    out.push_str(&format!("void {}(void)\n{{\n", kind.test_name(name)));
    for step in steps {
        out.push_str(&format!("    // TODO: {step}\n"));
    }
    out.push_str("    TEST_ASSERT(true); // Placeholder - implement actual test\n");
    out.push_str("}\n");
    out
}

fn render_runner(module: &str, plans: &[StubPlan]) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\n// Test Runner\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("void test_{module}_functions(void)\n{{\n"));
    for name in plans.iter().flat_map(StubPlan::test_names) {
        out.push_str(&format!("    RUN_TEST({name});\n"));
    }
    out.push_str("}\n");
    out
}

/// Single failing placeholder test, printed by the detector for quick copy-paste.
pub fn render_quick_stub(func: &FunctionRecord) -> String {
    let name = &func.name;
    let mut out = String::new();
    out.push_str(&format!("// Test for {name}\n"));
    out.push_str(&format!("void test_{name}(void)\n{{\n"));
    out.push_str(&format!("    // TODO: Implement test for {name}\n"));
    out.push_str(&format!("    // Function signature: {} {name}(...)\n", func.return_type));
    out.push_str(&format!("    // Location: {}\n", func.location()));
    out.push('\n');
    out.push_str("    // Example test structure:\n");
    out.push_str("    // 1. Setup test data\n");
    out.push_str("    // 2. Call the function\n");
    out.push_str("    // 3. Assert expected results\n");
    out.push('\n');
    out.push_str("    TEST_ASSERT(false); // Remove this and implement actual test\n");
    out.push_str("}\n");
    out
}
