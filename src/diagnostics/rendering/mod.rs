//! Rendering utilities for diagnostics
//!
//! This module contains the color table and the line formatter used by the
//! reporter.

pub mod colors;
pub mod formatter;

pub use colors::{Color, ColorChoice, RESET, Style, colors_disabled};
pub use formatter::{
    Prefix, describe_error, render_line, render_prefix, truncate_chars, wants_cause,
};
