//! Init command - scaffolds a new workspace.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, MODULE_MANIFEST, ModuleName, WORKSPACE_MANIFEST};

const MODULE_TEMPLATE: &str = r#"# modplan module manifest
[module]
language_version = 8
dependencies = []

# Declare an entry point to make this module executable:
# [application]
# main_class = "com.example.Main"
"#;

/// Files created by a successful init.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub module: String,
    pub created: Vec<String>,
}

fn workspace_template(member: &str) -> String {
    format!(
        "# modplan workspace manifest\n\
         # Member order is declaration order and breaks build-order ties\n\
         [workspace]\n\
         members = [\"{member}\"]\n"
    )
}

/// Execute the init command.
///
/// Creates `workspace.toml` and one starter module manifest. Fails with
/// `WorkspaceExists` if the directory already holds a workspace manifest.
pub fn execute(path: Option<&Path>, name: &str) -> Result<InitOutcome, AppError> {
    let root = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let module = ModuleName::new(name)?;

    let manifest_path = root.join(WORKSPACE_MANIFEST);
    if manifest_path.exists() {
        return Err(AppError::WorkspaceExists);
    }

    let module_dir = root.join(module.as_str());
    fs::create_dir_all(&module_dir)?;
    fs::write(&manifest_path, workspace_template(module.as_str()))?;
    fs::write(module_dir.join(MODULE_MANIFEST), MODULE_TEMPLATE)?;

    Ok(InitOutcome {
        module: module.to_string(),
        created: vec![
            WORKSPACE_MANIFEST.to_string(),
            format!("{}/{}", module.as_str(), MODULE_MANIFEST),
        ],
    })
}
