//! Init command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_init(name: Option<String>, path: Option<PathBuf>) -> Result<(), AppError> {
    let name = match name {
        Some(name) => name,
        None => match super::prompt_module_name()? {
            Some(name) => name,
            // Prompt cancelled
            None => return Ok(()),
        },
    };

    let outcome = match path {
        Some(dir) => crate::app::api::init_at(dir, &name)?,
        None => crate::app::api::init(&name)?,
    };

    println!("✅ Created workspace with module '{}'", outcome.module);
    for file in &outcome.created {
        println!("  • {}", file);
    }
    Ok(())
}
