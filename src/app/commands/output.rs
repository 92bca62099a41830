//! Canonical machine-readable output helper.
//!
//! Writes compact single-line JSON to stdout on success, and optionally
//! appends `json=<...>` to `GITHUB_OUTPUT` when set.

use serde::Serialize;
use std::io::Write;

use crate::domain::AppError;

/// Write a report in canonical machine-readable format.
///
/// - Writes compact single-line JSON to stdout.
/// - Appends `json=<same JSON>` to `GITHUB_OUTPUT` file if the env var is set.
///
/// # Errors
/// Returns an error if JSON serialization fails or file I/O fails.
pub fn write_json_output<T: Serialize>(output: &T) -> Result<(), AppError> {
    // Serialize to compact single-line JSON (no pretty printing)
    let json = serde_json::to_string(output)
        .map_err(|e| AppError::Internal(format!("Failed to serialize output: {}", e)))?;

    debug_assert!(!json.contains('\n'), "machine output JSON must be single-line");

    println!("{}", json);

    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AppError::Internal(format!("Failed to open GITHUB_OUTPUT: {}", e)))?;

        // Write as single line: json=<value>
        // Value must not contain newlines (enforced above)
        writeln!(file, "json={}", json)
            .map_err(|e| AppError::Internal(format!("Failed to write GITHUB_OUTPUT: {}", e)))?;
    }

    Ok(())
}
