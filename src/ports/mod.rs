mod workspace_source;

pub use workspace_source::WorkspaceSource;
