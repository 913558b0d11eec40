pub mod filtering;
pub mod options;
pub mod types;

pub use filtering::{CompiledFilter, apply};
pub use options::FilterOptions;
pub use types::*;
