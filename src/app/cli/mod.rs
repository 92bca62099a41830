//! CLI Adapter.

mod check;
mod init;
mod list;
mod order;

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "modplan")]
#[command(version)]
#[command(
    about = "Declare multi-module build workspaces and resolve the build order",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold workspace.toml and a starter module
    #[clap(visible_alias = "i")]
    Init {
        /// Name for the starter module (prompted when omitted)
        name: Option<String>,
        /// Workspace directory (defaults to current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Resolve and print the dependency-ordered build plan
    #[clap(visible_alias = "o")]
    Order {
        /// Restrict the plan to these modules plus their dependencies
        modules: Vec<String>,
        /// Output format (text, json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Workspace directory (defaults to current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// List workspace modules
    #[clap(visible_alias = "ls")]
    List {
        /// Show detailed info for a specific module
        #[arg(long)]
        detail: Option<String>,
        /// Workspace directory (defaults to current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Validate manifests and the dependency graph
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
        /// Workspace directory (defaults to current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { name, path } => init::run_init(name, path).map(|_| 0),
        Commands::Order { modules, format, path } => {
            order::run_order(&modules, &format, path).map(|_| 0)
        }
        Commands::List { detail, path } => list::run_list(detail, path).map(|_| 0),
        Commands::Check { strict, path } => check::run_check(strict, path),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn prompt_module_name() -> Result<Option<String>, AppError> {
    match Input::new().with_prompt("Module name").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read module name: {}", err))),
    }
}
