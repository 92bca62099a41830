//! Check command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_check(strict: bool, path: Option<PathBuf>) -> Result<i32, AppError> {
    let options = crate::CheckOptions { strict };
    let outcome = match path {
        Some(dir) => crate::app::api::check_at(dir, options)?,
        None => crate::app::api::check(options)?,
    };

    Ok(outcome.exit_code)
}
