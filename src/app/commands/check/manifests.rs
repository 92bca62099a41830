//! Manifest collection pass.

use std::collections::BTreeSet;

use crate::domain::{
    AppError, MODULE_MANIFEST, ModuleSpec, WORKSPACE_MANIFEST, parse_module_manifest,
};
use crate::ports::WorkspaceSource;

use super::diagnostics::Diagnostics;

/// Read and validate every member manifest.
///
/// Members that fail to load are reported and skipped so the graph passes
/// can still run over the rest. Duplicate member entries are reported
/// against `workspace.toml` and only the first occurrence is kept.
pub fn collect_modules(
    source: &impl WorkspaceSource,
    members: &[String],
    diagnostics: &mut Diagnostics,
) -> Vec<ModuleSpec> {
    let mut specs = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for member in members {
        if !seen.insert(member.as_str()) {
            diagnostics
                .push_error(WORKSPACE_MANIFEST, format!("Module '{member}' is already declared"));
            continue;
        }

        let file = format!("{member}/{MODULE_MANIFEST}");
        let loaded = source
            .module_manifest(member)
            .and_then(|content| parse_module_manifest(&file, &content))
            .and_then(|manifest| manifest.into_spec(member));

        match loaded {
            Ok(spec) => {
                warn_duplicate_dependencies(&spec, &file, diagnostics);
                specs.push(spec);
            }
            Err(err) => {
                let message = match err {
                    AppError::ModuleManifestMissing(_) => "Missing required file".to_string(),
                    AppError::Manifest { details, .. } => details,
                    other => other.to_string(),
                };
                diagnostics.push_error(&file, message);
            }
        }
    }

    specs
}

fn warn_duplicate_dependencies(spec: &ModuleSpec, file: &str, diagnostics: &mut Diagnostics) {
    let mut seen = BTreeSet::new();
    for dep in &spec.dependencies {
        if !seen.insert(dep.as_str()) {
            diagnostics.push_warning(file, format!("Dependency '{dep}' is listed more than once"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_workspace_source::MemoryWorkspaceSource;

    #[test]
    fn collects_valid_members_and_reports_broken_ones() {
        let source = MemoryWorkspaceSource::new()
            .with_member("good", "[module]\nlanguage_version = 8\n")
            .with_member("broken", "[module]\nlanguage_version = \"eight\"\n");
        let members =
            vec!["good".to_string(), "broken".to_string(), "absent".to_string()];
        let mut diagnostics = Diagnostics::default();

        let specs = collect_modules(&source, &members, &mut diagnostics);

        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name.as_str(), "good");
        assert_eq!(diagnostics.error_count(), 2);
    }

    #[test]
    fn duplicate_member_is_reported_once_and_skipped() {
        let source = MemoryWorkspaceSource::new()
            .with_member("core", "[module]\nlanguage_version = 8\n");
        let members = vec!["core".to_string(), "core".to_string()];
        let mut diagnostics = Diagnostics::default();

        let specs = collect_modules(&source, &members, &mut diagnostics);

        assert_eq!(specs.len(), 1);
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.findings()[0].file, WORKSPACE_MANIFEST);
    }

    #[test]
    fn duplicate_dependency_entry_is_a_warning() {
        let source = MemoryWorkspaceSource::new().with_member(
            "demo",
            "[module]\nlanguage_version = 8\ndependencies = [\"core\", \"core\"]\n",
        );
        let members = vec!["demo".to_string()];
        let mut diagnostics = Diagnostics::default();

        let specs = collect_modules(&source, &members, &mut diagnostics);

        assert_eq!(specs.len(), 1);
        assert_eq!(diagnostics.error_count(), 0);
        assert_eq!(diagnostics.warning_count(), 1);
    }
}
