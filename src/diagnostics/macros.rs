//! `format!`-style front ends for the [`Reporter`](crate::diagnostics::Reporter)
//! operations.
//!
//! Each macro hands the reporter both the format literal and its arguments, so
//! the trailing-colon rule looks at the format string as written rather than at
//! the rendered text.

/// Report an error and exit with status 2.
///
/// ```no_run
/// use ereport::{diagnostics::Reporter, report_error};
/// let reporter = Reporter::new();
/// report_error!(reporter, "cannot open {}:", "prog.alan");
/// ```
#[macro_export]
macro_rules! report_error {
    ($reporter:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $reporter.error($fmt, ::std::format_args!($fmt $(, $arg)*))
    };
}

/// Report an error at the reporter's current position and exit with status 2.
#[macro_export]
macro_rules! report_error_at {
    ($reporter:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $reporter.error_at($fmt, ::std::format_args!($fmt $(, $arg)*))
    };
}

/// Report a warning and continue.
#[macro_export]
macro_rules! report_warning {
    ($reporter:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $reporter.warning($fmt, ::std::format_args!($fmt $(, $arg)*))
    };
}

/// Report a tagged diagnostic at the current position and exit with status 3.
#[macro_export]
macro_rules! report_tagged_at {
    ($reporter:expr, $tag:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $reporter.tagged_at($tag, $fmt, ::std::format_args!($fmt $(, $arg)*))
    };
}
