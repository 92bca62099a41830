//! Module declaration domain model.

use crate::domain::{AppError, EntryPoint, ModuleName};

/// The target language (toolchain) version a module is compiled against.
///
/// A plain positive integer, mirroring toolchain pins like
/// `languageVersion = 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageVersion(u32);

impl LanguageVersion {
    /// Validate and create a new `LanguageVersion`. Zero is rejected.
    pub fn new(version: u32) -> Result<Self, AppError> {
        if version == 0 {
            return Err(AppError::InvalidLanguageVersion(version));
        }
        Ok(Self(version))
    }

    /// Return the inner integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A declared module: one independently buildable unit of the workspace.
///
/// Immutable once declared; the registry takes ownership at `declare` time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    /// Module name (unique identifier, also the member directory name).
    pub name: ModuleName,
    /// Names of modules this one depends on, in declared order.
    pub dependencies: Vec<ModuleName>,
    /// Target language version for this module.
    pub language_version: LanguageVersion,
    /// Entry point, if this module is executable.
    pub entry_point: Option<EntryPoint>,
}

impl ModuleSpec {
    /// Whether this module declares an application entry point.
    pub fn is_executable(&self) -> bool {
        self.entry_point.is_some()
    }
}
