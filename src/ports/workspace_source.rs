//! Workspace manifest source port definition.

use crate::domain::AppError;

/// Port for reading workspace manifest content.
///
/// Keeps graph loading independent of the filesystem so resolution can be
/// driven from in-memory sources in tests.
pub trait WorkspaceSource {
    /// Read the root workspace manifest.
    fn workspace_manifest(&self) -> Result<String, AppError>;

    /// Read the module manifest of one workspace member.
    fn module_manifest(&self, member: &str) -> Result<String, AppError>;
}
