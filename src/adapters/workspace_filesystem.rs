//! Filesystem-backed workspace source.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, MODULE_MANIFEST, ModuleName, WORKSPACE_MANIFEST};
use crate::ports::WorkspaceSource;

/// Reads workspace and module manifests from a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemWorkspaceSource {
    root: PathBuf,
}

impl FilesystemWorkspaceSource {
    /// Create a source rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a source rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the root manifest.
    pub fn workspace_manifest_path(&self) -> PathBuf {
        self.root.join(WORKSPACE_MANIFEST)
    }
}

impl WorkspaceSource for FilesystemWorkspaceSource {
    fn workspace_manifest(&self) -> Result<String, AppError> {
        let path = self.workspace_manifest_path();
        if !path.exists() {
            return Err(AppError::WorkspaceManifestMissing);
        }
        Ok(fs::read_to_string(&path)?)
    }

    fn module_manifest(&self, member: &str) -> Result<String, AppError> {
        // Member names double as directory names. Validate before joining
        // so a malformed members entry cannot escape the workspace root.
        let name = ModuleName::new(member)?;
        let path = self.root.join(name.as_str()).join(MODULE_MANIFEST);
        if !path.exists() {
            return Err(AppError::ModuleManifestMissing(member.to_string()));
        }
        Ok(fs::read_to_string(&path)?)
    }
}
