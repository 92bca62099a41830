//! Manifest formats: the root workspace manifest and per-module manifests.

use serde::Deserialize;

use crate::domain::{AppError, EntryPoint, LanguageVersion, ModuleName, ModuleSpec};

/// File name of the root manifest declaring workspace members.
pub const WORKSPACE_MANIFEST: &str = "workspace.toml";

/// File name of the per-member module manifest.
pub const MODULE_MANIFEST: &str = "module.toml";

/// Root manifest: `workspace.toml`.
///
/// The order of `members` is the declaration order of the workspace and
/// decides tie-breaks in the resolved build order.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceManifest {
    pub workspace: WorkspaceSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceSection {
    pub members: Vec<String>,
}

/// Per-member manifest: `<member>/module.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleManifest {
    pub module: ModuleSection,
    #[serde(default)]
    pub application: Option<ApplicationSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSection {
    pub language_version: u32,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicationSection {
    pub main_class: String,
}

/// Parse `workspace.toml` content.
///
/// An empty members list is rejected; a workspace that declares nothing
/// has nothing to resolve.
pub fn parse_workspace_manifest(content: &str) -> Result<WorkspaceManifest, AppError> {
    let manifest: WorkspaceManifest = toml::from_str(content).map_err(|err| AppError::Manifest {
        file: WORKSPACE_MANIFEST.to_string(),
        details: err.to_string(),
    })?;

    if manifest.workspace.members.is_empty() {
        return Err(AppError::config_error(format!(
            "No members declared in {WORKSPACE_MANIFEST}"
        )));
    }

    Ok(manifest)
}

/// Parse one member's `module.toml` content.
///
/// `file` is the path rendered into parse errors, e.g. `ll4j-demo/module.toml`.
pub fn parse_module_manifest(file: &str, content: &str) -> Result<ModuleManifest, AppError> {
    toml::from_str(content).map_err(|err| AppError::Manifest {
        file: file.to_string(),
        details: err.to_string(),
    })
}

impl ModuleManifest {
    /// Validate the manifest into a [`ModuleSpec`] for the member `name`.
    pub fn into_spec(self, name: &str) -> Result<ModuleSpec, AppError> {
        let name = ModuleName::new(name)?;
        let language_version = LanguageVersion::new(self.module.language_version)?;

        let dependencies = self
            .module
            .dependencies
            .iter()
            .map(|dep| ModuleName::new(dep))
            .collect::<Result<Vec<_>, _>>()?;

        let entry_point = self
            .application
            .map(|app| EntryPoint::new(&app.main_class))
            .transpose()?;

        Ok(ModuleSpec { name, dependencies, language_version, entry_point })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_workspace_members_in_order() {
        let manifest = parse_workspace_manifest(
            r#"
            [workspace]
            members = ["ll4j-huzpsb", "ll4j-train", "ll4j-demo"]
            "#,
        )
        .unwrap();

        assert_eq!(
            manifest.workspace.members,
            vec!["ll4j-huzpsb", "ll4j-train", "ll4j-demo"]
        );
    }

    #[test]
    fn empty_members_is_a_configuration_error() {
        let err = parse_workspace_manifest("[workspace]\nmembers = []\n").unwrap_err();

        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("No members")));
    }

    #[test]
    fn unknown_workspace_key_is_rejected() {
        let err = parse_workspace_manifest(
            "[workspace]\nmembers = [\"a\"]\nedition = \"2024\"\n",
        )
        .unwrap_err();

        assert!(matches!(err, AppError::Manifest { file, .. } if file == WORKSPACE_MANIFEST));
    }

    #[test]
    fn parses_minimal_module_manifest() {
        let manifest =
            parse_module_manifest("ll4j-huzpsb/module.toml", "[module]\nlanguage_version = 8\n")
                .unwrap();

        assert_eq!(manifest.module.language_version, 8);
        assert!(manifest.module.dependencies.is_empty());
        assert!(manifest.application.is_none());
    }

    #[test]
    fn parses_full_module_manifest() {
        let manifest = parse_module_manifest(
            "ll4j-demo/module.toml",
            r#"
            [module]
            language_version = 8
            dependencies = ["ll4j-huzpsb", "ll4j-train"]

            [application]
            main_class = "huzpsb.ll4j.samples.TestMinRt"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.module.dependencies.len(), 2);
        assert_eq!(
            manifest.application.map(|app| app.main_class).as_deref(),
            Some("huzpsb.ll4j.samples.TestMinRt")
        );
    }

    #[test]
    fn missing_language_version_is_rejected() {
        let err =
            parse_module_manifest("ll4j-rt/module.toml", "[module]\ndependencies = []\n")
                .unwrap_err();

        assert!(matches!(
            err,
            AppError::Manifest { file, details }
                if file == "ll4j-rt/module.toml" && details.contains("language_version")
        ));
    }

    #[test]
    fn application_without_main_class_is_rejected() {
        let err = parse_module_manifest(
            "ll4j-demo/module.toml",
            "[module]\nlanguage_version = 8\n\n[application]\n",
        )
        .unwrap_err();

        assert!(matches!(err, AppError::Manifest { .. }));
    }

    #[test]
    fn into_spec_builds_a_validated_module() {
        let manifest = parse_module_manifest(
            "ll4j-demo/module.toml",
            r#"
            [module]
            language_version = 8
            dependencies = ["ll4j-huzpsb"]

            [application]
            main_class = "huzpsb.ll4j.samples.TestMinRt"
            "#,
        )
        .unwrap();

        let spec = manifest.into_spec("ll4j-demo").unwrap();

        assert_eq!(spec.name.as_str(), "ll4j-demo");
        assert_eq!(spec.language_version.get(), 8);
        assert!(spec.is_executable());
    }

    #[test]
    fn into_spec_rejects_invalid_dependency_name() {
        let manifest = parse_module_manifest(
            "demo/module.toml",
            "[module]\nlanguage_version = 8\ndependencies = [\"../escape\"]\n",
        )
        .unwrap();

        let err = manifest.into_spec("demo").unwrap_err();

        assert!(matches!(err, AppError::InvalidModuleName(_)));
    }

    #[test]
    fn into_spec_rejects_zero_language_version() {
        let manifest =
            parse_module_manifest("demo/module.toml", "[module]\nlanguage_version = 0\n").unwrap();

        let err = manifest.into_spec("demo").unwrap_err();

        assert!(matches!(err, AppError::InvalidLanguageVersion(0)));
    }

    #[test]
    fn into_spec_rejects_malformed_main_class() {
        let manifest = parse_module_manifest(
            "demo/module.toml",
            "[module]\nlanguage_version = 8\n\n[application]\nmain_class = \"has-hyphen.Main\"\n",
        )
        .unwrap();

        let err = manifest.into_spec("demo").unwrap_err();

        assert!(matches!(err, AppError::InvalidEntryPoint(_)));
    }
}
