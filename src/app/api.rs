//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together workspace
//! sources and command execution, so callers can drive every operation
//! without going through the CLI.

use std::path::PathBuf;

use crate::adapters::workspace_filesystem::FilesystemWorkspaceSource;
use crate::app::commands::{self, check, init, list, order};
use crate::domain::BuildGraph;

pub use crate::app::commands::check::{CheckOptions, CheckOutcome};
pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::list::{ModuleDetail, ModuleSummary};
pub use crate::app::commands::order::{BuildOrderEntry, BuildOrderReport};
pub use crate::domain::AppError;

/// Load and finalize the build graph of the workspace in the current directory.
pub fn load_graph() -> Result<BuildGraph, AppError> {
    let source = FilesystemWorkspaceSource::current()?;
    commands::load_build_graph(&source)
}

/// Load and finalize the build graph of the workspace at the specified path.
pub fn load_graph_at(path: impl Into<PathBuf>) -> Result<BuildGraph, AppError> {
    let source = FilesystemWorkspaceSource::new(path.into());
    commands::load_build_graph(&source)
}

/// Scaffold a new workspace in the current directory.
pub fn init(name: &str) -> Result<InitOutcome, AppError> {
    init::execute(None, name)
}

/// Scaffold a new workspace at the specified path.
pub fn init_at(path: impl Into<PathBuf>, name: &str) -> Result<InitOutcome, AppError> {
    init::execute(Some(&path.into()), name)
}

/// Resolve the build order of the workspace in the current directory.
///
/// With no targets the report covers the whole workspace.
pub fn order(targets: &[String]) -> Result<BuildOrderReport, AppError> {
    order::execute(None, targets)
}

/// Resolve the build order of the workspace at the specified path.
pub fn order_at(path: impl Into<PathBuf>, targets: &[String]) -> Result<BuildOrderReport, AppError> {
    order::execute(Some(&path.into()), targets)
}

/// List modules of the workspace in the current directory.
pub fn list() -> Result<Vec<ModuleSummary>, AppError> {
    list::execute(None)
}

/// List modules of the workspace at the specified path.
pub fn list_at(path: impl Into<PathBuf>) -> Result<Vec<ModuleSummary>, AppError> {
    list::execute(Some(&path.into()))
}

/// Detail one module of the workspace in the current directory.
pub fn list_detail(module: &str) -> Result<ModuleDetail, AppError> {
    list::execute_detail(None, module)
}

/// Detail one module of the workspace at the specified path.
pub fn list_detail_at(path: impl Into<PathBuf>, module: &str) -> Result<ModuleDetail, AppError> {
    list::execute_detail(Some(&path.into()), module)
}

/// Check the workspace in the current directory.
pub fn check(options: CheckOptions) -> Result<CheckOutcome, AppError> {
    check::execute(None, options)
}

/// Check the workspace at the specified path.
pub fn check_at(path: impl Into<PathBuf>, options: CheckOptions) -> Result<CheckOutcome, AppError> {
    check::execute(Some(&path.into()), options)
}
