pub mod check;
pub mod init;
pub mod list;
pub mod order;
pub mod output;

use std::path::Path;

use crate::adapters::workspace_filesystem::FilesystemWorkspaceSource;
use crate::domain::{
    AppError, BuildGraph, MODULE_MANIFEST, ModuleRegistry, parse_module_manifest,
    parse_workspace_manifest,
};
use crate::ports::WorkspaceSource;

/// Filesystem source for an explicit path, or the current directory.
pub(crate) fn workspace_source(path: Option<&Path>) -> Result<FilesystemWorkspaceSource, AppError> {
    match path {
        Some(p) => Ok(FilesystemWorkspaceSource::new(p.to_path_buf())),
        None => FilesystemWorkspaceSource::current(),
    }
}

/// Load all manifests, declare members in manifest order, and finalize.
///
/// Fail-fast: the first configuration problem aborts resolution. `check`
/// walks the same ground but collects every finding instead.
pub fn load_build_graph(source: &impl WorkspaceSource) -> Result<BuildGraph, AppError> {
    let manifest = parse_workspace_manifest(&source.workspace_manifest()?)?;

    let mut registry = ModuleRegistry::new();
    for member in &manifest.workspace.members {
        let content = source.module_manifest(member)?;
        let file = format!("{member}/{MODULE_MANIFEST}");
        let spec = parse_module_manifest(&file, &content)?.into_spec(member)?;
        registry.declare(spec)?;
    }

    registry.finalize()
}
