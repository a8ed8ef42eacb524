//! Diagnostics module.
//!
//! Formats error, warning and tagged messages for the diagnostic stream with an
//! optional colorized `program: source:line:col: Label:` prefix.

mod macros;
pub mod names;
pub mod position;
pub mod rendering;
pub mod reporter;
pub mod types;

pub use names::{ManagedProgramName, PlatformProgramName, ProgramName, basename};
pub use position::Position;
pub use rendering::{Color, ColorChoice, Style};
pub use reporter::{Reporter, ReporterBuilder};
pub use types::{EXIT_ERROR, EXIT_TAGGED, Severity};
