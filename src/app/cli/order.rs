//! Order command implementation.

use std::path::PathBuf;

use crate::app::commands::output;
use crate::domain::AppError;

pub fn run_order(modules: &[String], format: &str, path: Option<PathBuf>) -> Result<(), AppError> {
    let report = match path {
        Some(dir) => crate::app::api::order_at(dir, modules)?,
        None => crate::app::api::order(modules)?,
    };

    if format == "json" {
        output::write_json_output(&report)?;
        return Ok(());
    }

    println!("Build order ({} module(s)):", report.modules.len());
    for (i, entry) in report.modules.iter().enumerate() {
        match &entry.main_class {
            Some(main) => println!("  {}. {} ({})", i + 1, entry.name, main),
            None => println!("  {}. {}", i + 1, entry.name),
        }
    }
    Ok(())
}
