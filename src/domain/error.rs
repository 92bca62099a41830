use std::io;

use thiserror::Error;

/// Library-wide error type for modplan operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// workspace.toml already exists at the target location.
    #[error("workspace.toml already exists")]
    WorkspaceExists,

    /// No workspace.toml found at the workspace root.
    #[error("No workspace.toml found. Run 'modplan init' first.")]
    WorkspaceManifestMissing,

    /// A member listed in workspace.toml has no module.toml.
    #[error("Module manifest not found for member '{0}' (expected {0}/module.toml)")]
    ModuleManifestMissing(String),

    /// Module identifier is invalid.
    #[error(
        "Invalid module name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidModuleName(String),

    /// Entry point is not a fully qualified class-like name.
    #[error("Invalid entry point '{0}': must be dot-separated identifiers like 'com.example.Main'")]
    InvalidEntryPoint(String),

    /// Language version must be a positive integer.
    #[error("Invalid language version '{0}': must be a positive integer")]
    InvalidLanguageVersion(u32),

    /// A module name was declared more than once.
    #[error("Module '{0}' is already declared")]
    DuplicateModule(String),

    /// A declared dependency names no declared module.
    #[error("Module '{module}' depends on '{dependency}', which is not a declared module")]
    UnknownDependency { module: String, dependency: String },

    /// The dependency graph contains a cycle.
    #[error("Cyclic dependency detected: {0}")]
    CyclicDependency(String),

    /// A requested module is not part of the finalized graph.
    #[error("Module '{name}' not found. Declared modules: {available}")]
    UnknownModule { name: String, available: String },

    /// Malformed manifest file.
    #[error("Failed to parse {file}: {details}")]
    Manifest { file: String, details: String },

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidModuleName(_)
            | AppError::InvalidEntryPoint(_)
            | AppError::InvalidLanguageVersion(_)
            | AppError::UnknownDependency { .. }
            | AppError::CyclicDependency(_)
            | AppError::Manifest { .. } => io::ErrorKind::InvalidInput,
            AppError::WorkspaceManifestMissing
            | AppError::ModuleManifestMissing(_)
            | AppError::UnknownModule { .. } => io::ErrorKind::NotFound,
            AppError::WorkspaceExists | AppError::DuplicateModule(_) => {
                io::ErrorKind::AlreadyExists
            }
            AppError::Internal(_) => io::ErrorKind::Other,
        }
    }
}
