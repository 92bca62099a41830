//! modplan: declare multi-module build workspaces and resolve a
//! deterministic, dependency-ordered build plan.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::commands::check::{CheckOptions, CheckOutcome, Diagnostic, Diagnostics, Severity};
pub use app::commands::init::InitOutcome;
pub use app::commands::list::{ModuleDetail, ModuleSummary};
pub use app::commands::order::{BuildOrderEntry, BuildOrderReport};
pub use domain::{
    AppError, BuildGraph, EntryPoint, LanguageVersion, ModuleName, ModuleRegistry, ModuleSpec,
};
