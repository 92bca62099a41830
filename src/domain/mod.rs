pub mod error;
pub mod graph;
pub mod identifiers;
pub mod manifest;
pub mod module;
pub mod registry;

pub use error::AppError;
pub use graph::BuildGraph;
pub use identifiers::{EntryPoint, ModuleName};
pub use manifest::{
    ApplicationSection, MODULE_MANIFEST, ModuleManifest, ModuleSection, WORKSPACE_MANIFEST,
    WorkspaceManifest, WorkspaceSection, parse_module_manifest, parse_workspace_manifest,
};
pub use module::{LanguageVersion, ModuleSpec};
pub use registry::{ModuleRegistry, format_cycle};
