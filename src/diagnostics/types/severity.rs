//! Diagnostic severity levels

use crate::diagnostics::rendering::colors::{Color, Style};

/// Exit status for ordinary fatal errors and allocation failures.
pub const EXIT_ERROR: i32 = 2;
/// Exit status for tagged fatal diagnostics.
pub const EXIT_TAGGED: i32 = 3;

/// Severity of a reported message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Fatal user-facing error; the process exits with [`EXIT_ERROR`]
    Error,
    /// Non-fatal; control returns to the caller
    Warning,
    /// Fatal diagnostic with a caller-chosen label; exits with [`EXIT_TAGGED`]
    Tagged(String),
}

impl Severity {
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self::Tagged(tag.into())
    }

    /// Label text placed before the message body.
    pub fn label(&self) -> &str {
        match self {
            Severity::Error => "Error:",
            Severity::Warning => "Warning:",
            Severity::Tagged(tag) => tag,
        }
    }

    /// Style applied to the label on a color terminal. Tags are printed as given.
    pub fn style(&self) -> Option<Style> {
        match self {
            Severity::Error => Some(Style::bold(Color::Red)),
            Severity::Warning => Some(Style::bold(Color::Yellow)),
            Severity::Tagged(_) => None,
        }
    }

    /// Exit status once the message is written, `None` when reporting continues.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Severity::Error => Some(EXIT_ERROR),
            Severity::Warning => None,
            Severity::Tagged(_) => Some(EXIT_TAGGED),
        }
    }
}
