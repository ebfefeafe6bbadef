//! Test-stub planning and generation for untested functions.
//!
//! Every function gets a `StubPlan`: its signature plus the ordered list of
//! stub variants it needs. The same plan drives both the stub bodies and the
//! module's `RUN_TEST` registration block, so the two can never disagree.

pub mod render;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::extract::Extractor;
use crate::model::{FunctionRecord, Signature};
use crate::project::EngineConfig;

pub use render::{render_module, render_quick_stub};

/// One generated test variant for a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StubKind {
    /// Always generated.
    Valid,
    /// Generated when the function takes at least one parameter.
    EdgeCases,
    /// Generated when a parameter carries a pointer marker.
    NullParams,
    /// Generated when the return type is testable (not `void`).
    ReturnValue,
}

impl StubKind {
    /// Suffix appended to `test_<function>_` to name the generated test.
    pub fn suffix(self) -> &'static str {
        match self {
            StubKind::Valid => "valid",
            StubKind::EdgeCases => "edge_cases",
            StubKind::NullParams => "null_params",
            StubKind::ReturnValue => "return_value",
        }
    }

    pub fn test_name(self, function: &str) -> String {
        format!("test_{function}_{}", self.suffix())
    }
}

/// Decide which stub variants a function needs, in emission order.
pub fn plan_stub_kinds(
    record: &FunctionRecord,
    signature: &Signature,
    config: &EngineConfig,
) -> Vec<StubKind> {
    let mut kinds = vec![StubKind::Valid];
    if signature.has_parameters() {
        kinds.push(StubKind::EdgeCases);
        if signature.has_pointer_parameter() {
            kinds.push(StubKind::NullParams);
        }
    }
    if config.is_testable_return_type(&record.return_type) {
        kinds.push(StubKind::ReturnValue);
    }
    kinds
}

/// A function together with its parsed signature and the stubs it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubPlan {
    pub function: FunctionRecord,
    pub signature: Signature,
    pub kinds: Vec<StubKind>,
}

impl StubPlan {
    pub fn new(function: FunctionRecord, signature: Signature, config: &EngineConfig) -> Self {
        let kinds = plan_stub_kinds(&function, &signature, config);
        Self { function, signature, kinds }
    }

    /// Generated test names in registration order.
    pub fn test_names(&self) -> Vec<String> {
        self.kinds.iter().map(|k| k.test_name(&self.function.name)).collect()
    }
}

/// One generated test module (one output file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedModule {
    /// File stem of the source file the functions came from.
    pub name: String,
    pub plans: Vec<StubPlan>,
    pub text: String,
}

impl GeneratedModule {
    /// Every registered test name, in per-function order.
    pub fn test_names(&self) -> Vec<String> {
        self.plans.iter().flat_map(StubPlan::test_names).collect()
    }
}

/// Group records by module name, keeping first-appearance order of modules
/// and scan order within each module.
pub fn group_by_module(functions: &[FunctionRecord]) -> Vec<(String, Vec<FunctionRecord>)> {
    group_in_order(functions.iter().cloned(), FunctionRecord::module_name)
}

fn group_in_order<T>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> String,
) -> Vec<(String, Vec<T>)> {
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for item in items {
        let name = key(&item);
        match groups.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, members)) => members.push(item),
            None => groups.push((name, vec![item])),
        }
    }
    groups
}

/// Turn already-planned functions into rendered modules.
///
/// A name seen twice in one module (a prototype plus its definition) keeps
/// only its first plan, so no test function is defined twice.
/// Pure: the same plans always render to byte-identical text.
pub fn build_modules(plans: Vec<StubPlan>) -> Vec<GeneratedModule> {
    group_in_order(plans, |plan| plan.function.module_name())
        .into_iter()
        .map(|(name, plans)| {
            let mut seen = HashSet::new();
            let plans: Vec<StubPlan> = plans
                .into_iter()
                .filter(|plan| seen.insert(plan.function.name.clone()))
                .collect();
            let text = render_module(&name, &plans);
            GeneratedModule { name, plans, text }
        })
        .collect()
}

/// Generates stub modules, reading each function's signature from disk.
#[derive(Debug, Clone, Default)]
pub struct StubGenerator {
    extractor: Extractor,
}

impl StubGenerator {
    pub fn new(config: EngineConfig) -> Self {
        Self { extractor: Extractor::new(config) }
    }

    /// Plan a single function, running the on-demand signature pass.
    pub fn plan(&self, record: &FunctionRecord) -> StubPlan {
        let signature = self.extractor.signature(record);
        StubPlan::new(record.clone(), signature, self.extractor.config())
    }

    /// Plan and render every untested function, one module per source file stem.
    pub fn generate(&self, untested: &[FunctionRecord]) -> Vec<GeneratedModule> {
        build_modules(untested.iter().map(|f| self.plan(f)).collect())
    }
}
