use super::validation::validate_class_path;
use crate::domain::AppError;

/// A validated application entry point: a fully qualified class-like name
/// such as `huzpsb.ll4j.samples.TestMinRt`.
///
/// A module carrying an entry point is executable; the name itself is
/// opaque to the resolver and never dereferenced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryPoint(String);

impl EntryPoint {
    /// Validate and create a new `EntryPoint`.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if validate_class_path(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidEntryPoint(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EntryPoint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
