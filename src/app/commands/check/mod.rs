//! Check command - validates the whole workspace and reports every finding.

mod diagnostics;
mod graph;
mod manifests;

use std::path::Path;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

use crate::domain::{AppError, WORKSPACE_MANIFEST, parse_workspace_manifest};
use crate::ports::WorkspaceSource;

use super::workspace_source;

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

/// Execute the check command.
///
/// Unlike resolution, which aborts at the first problem, check walks the
/// whole workspace and reports everything it finds to stderr, then maps
/// the outcome to an exit code: 0 clean, 1 errors, 2 warnings under
/// `--strict`.
pub fn execute(path: Option<&Path>, options: CheckOptions) -> Result<CheckOutcome, AppError> {
    let source = workspace_source(path)?;
    execute_with_source(&source, options)
}

pub fn execute_with_source(
    source: &impl WorkspaceSource,
    options: CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let diagnostics = run_checks(source)?;
    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(CheckOutcome { errors, warnings, exit_code })
}

/// Run all checks without printing.
///
/// A missing workspace manifest is the only fatal error; every other
/// problem becomes a finding so one run surfaces the complete picture.
pub fn run_checks(source: &impl WorkspaceSource) -> Result<Diagnostics, AppError> {
    let content = source.workspace_manifest()?;

    let mut diagnostics = Diagnostics::default();
    let manifest = match parse_workspace_manifest(&content) {
        Ok(manifest) => manifest,
        Err(err) => {
            let message = match err {
                AppError::Manifest { details, .. } => details,
                other => other.to_string(),
            };
            diagnostics.push_error(WORKSPACE_MANIFEST, message);
            return Ok(diagnostics);
        }
    };

    let specs = manifests::collect_modules(source, &manifest.workspace.members, &mut diagnostics);
    graph::graph_checks(&specs, &mut diagnostics);

    Ok(diagnostics)
}
