//! List command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_list(detail: Option<String>, path: Option<PathBuf>) -> Result<(), AppError> {
    if let Some(module) = detail {
        let info = match path {
            Some(dir) => crate::app::api::list_detail_at(dir, &module)?,
            None => crate::app::api::list_detail(&module)?,
        };

        println!("{} (language version {})", info.name, info.language_version);
        if let Some(main) = &info.main_class {
            println!("Entry point: {}", main);
        }
        if !info.dependencies.is_empty() {
            println!("\nDependencies:");
            for dep in &info.dependencies {
                println!("  • {}", dep);
            }
        }
        if !info.dependents.is_empty() {
            println!("\nDependents:");
            for dependent in &info.dependents {
                println!("  • {}", dependent);
            }
        }
    } else {
        let modules = match path {
            Some(dir) => crate::app::api::list_at(dir)?,
            None => crate::app::api::list()?,
        };

        println!("Workspace modules (build order):");
        for module in modules {
            let marker = if module.executable { " [executable]" } else { "" };
            println!(
                "  {} - language version {}{}",
                module.name, module.language_version, marker
            );
        }
    }
    Ok(())
}
