/// Validates a module identifier string.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Characters are alphanumeric, '-', '_', or '.'
///
/// Module names double as directory names, so anything that could escape
/// the workspace root is rejected here.
pub fn validate_identifier(id: &str) -> bool {
    if id.is_empty() {
        return false;
    }
    if id.contains('/') || id.contains('\\') {
        return false;
    }
    if id == "." || id == ".." {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

/// Validates a fully qualified class-like entry point name.
///
/// Checks:
/// - Non-empty
/// - One or more '.'-separated segments
/// - Each segment starts with a letter, '_', or '$'
/// - Remaining segment characters are alphanumeric, '_', or '$'
pub fn validate_class_path(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    name.split('.').all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
                chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
            }
            _ => false,
        }
    })
}
