//! Core types shared by the reporting routines

pub mod severity;

pub use severity::{EXIT_ERROR, EXIT_TAGGED, Severity};
