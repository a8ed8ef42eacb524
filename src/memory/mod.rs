//! Fail-fast allocation helpers.

pub mod checked;
pub mod error;

pub use checked::{try_alloc, try_realloc, try_strdup};
pub use error::AllocError;
