//! List command - lists workspace modules.

use std::path::Path;

use crate::domain::AppError;
use crate::ports::WorkspaceSource;

use super::{load_build_graph, workspace_source};

/// Summary information for a module.
#[derive(Debug, Clone)]
pub struct ModuleSummary {
    pub name: String,
    pub language_version: u32,
    pub executable: bool,
}

/// Detailed information for a module.
#[derive(Debug, Clone)]
pub struct ModuleDetail {
    pub name: String,
    pub language_version: u32,
    pub main_class: Option<String>,
    pub dependencies: Vec<String>,
    pub dependents: Vec<String>,
}

/// Execute the list command.
///
/// Returns summaries of all workspace modules in build order.
pub fn execute(path: Option<&Path>) -> Result<Vec<ModuleSummary>, AppError> {
    let source = workspace_source(path)?;
    execute_with_source(&source)
}

pub fn execute_with_source(source: &impl WorkspaceSource) -> Result<Vec<ModuleSummary>, AppError> {
    let graph = load_build_graph(source)?;

    Ok(graph
        .modules()
        .iter()
        .map(|module| ModuleSummary {
            name: module.name.to_string(),
            language_version: module.language_version.get(),
            executable: module.is_executable(),
        })
        .collect())
}

/// Execute the list --detail command.
///
/// Returns detailed information for a specific module.
pub fn execute_detail(path: Option<&Path>, module_name: &str) -> Result<ModuleDetail, AppError> {
    let source = workspace_source(path)?;
    execute_detail_with_source(&source, module_name)
}

pub fn execute_detail_with_source(
    source: &impl WorkspaceSource,
    module_name: &str,
) -> Result<ModuleDetail, AppError> {
    let graph = load_build_graph(source)?;
    let module = graph.require(module_name)?;
    let dependents = graph.dependents_of(module_name)?;

    Ok(ModuleDetail {
        name: module.name.to_string(),
        language_version: module.language_version.get(),
        main_class: module.entry_point.as_ref().map(|entry| entry.to_string()),
        dependencies: module.dependencies.iter().map(|dep| dep.to_string()).collect(),
        dependents: dependents.iter().map(|name| name.to_string()).collect(),
    })
}
