pub mod memory_workspace_source;
pub mod workspace_filesystem;
