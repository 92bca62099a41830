//! In-memory workspace source for testing.

use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::ports::WorkspaceSource;

/// In-memory workspace source, built up manifest by manifest.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspaceSource {
    workspace: Option<String>,
    members: BTreeMap<String, String>,
}

impl MemoryWorkspaceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root manifest content.
    pub fn with_workspace(mut self, content: &str) -> Self {
        self.workspace = Some(content.to_string());
        self
    }

    /// Add one member manifest.
    pub fn with_member(mut self, name: &str, content: &str) -> Self {
        self.members.insert(name.to_string(), content.to_string());
        self
    }
}

impl WorkspaceSource for MemoryWorkspaceSource {
    fn workspace_manifest(&self) -> Result<String, AppError> {
        self.workspace.clone().ok_or(AppError::WorkspaceManifestMissing)
    }

    fn module_manifest(&self, member: &str) -> Result<String, AppError> {
        self.members
            .get(member)
            .cloned()
            .ok_or_else(|| AppError::ModuleManifestMissing(member.to_string()))
    }
}
