pub mod entry_point;
pub mod module_name;
pub mod validation;

pub use entry_point::EntryPoint;
pub use module_name::ModuleName;
