//! Order command - resolves the workspace build order.

use std::path::Path;

use serde::Serialize;

use crate::domain::{AppError, BuildGraph, ModuleSpec};
use crate::ports::WorkspaceSource;

use super::{load_build_graph, workspace_source};

/// Schema version of the machine-readable build order report.
pub const SCHEMA_VERSION: u32 = 1;

/// One module of the resolved build order.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOrderEntry {
    pub name: String,
    pub language_version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_class: Option<String>,
    pub dependencies: Vec<String>,
}

/// Machine-readable build order report.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOrderReport {
    pub schema_version: u32,
    pub modules: Vec<BuildOrderEntry>,
}

/// Execute the order command.
///
/// With no targets the whole workspace is resolved; otherwise the report
/// covers the targets plus their transitive dependencies, still in build
/// order.
pub fn execute(path: Option<&Path>, targets: &[String]) -> Result<BuildOrderReport, AppError> {
    let source = workspace_source(path)?;
    execute_with_source(&source, targets)
}

/// Resolve through any workspace source.
pub fn execute_with_source(
    source: &impl WorkspaceSource,
    targets: &[String],
) -> Result<BuildOrderReport, AppError> {
    let graph = load_build_graph(source)?;
    report_for(&graph, targets)
}

fn report_for(graph: &BuildGraph, targets: &[String]) -> Result<BuildOrderReport, AppError> {
    let modules: Vec<&ModuleSpec> = if targets.is_empty() {
        graph.modules().iter().collect()
    } else {
        graph.closure(targets)?
    };

    Ok(BuildOrderReport {
        schema_version: SCHEMA_VERSION,
        modules: modules.into_iter().map(entry_for).collect(),
    })
}

fn entry_for(module: &ModuleSpec) -> BuildOrderEntry {
    BuildOrderEntry {
        name: module.name.to_string(),
        language_version: module.language_version.get(),
        main_class: module.entry_point.as_ref().map(|entry| entry.to_string()),
        dependencies: module.dependencies.iter().map(|dep| dep.to_string()).collect(),
    }
}
