pub mod diagnostics;
pub mod memory;

pub use diagnostics::{Position, Reporter, Severity};
pub use memory::AllocError;
