//! Text formatting utilities for diagnostics
//!
//! A diagnostic line has the shape
//! `program: source:line:col: Label: message[: cause]`, where every part of the
//! prefix is optional.

use std::fmt::{self, Write as _};
use std::io;

use crate::diagnostics::position::Position;
use crate::diagnostics::types::Severity;

use super::colors::{Color, Style};

/// Style shared by the source name and the position.
const LOCATION_STYLE: Style = Style {
    color: Color::White,
    bold: true,
    high: false,
};

/// Everything that precedes the message body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefix<'a> {
    pub program: Option<&'a str>,
    pub source: Option<&'a str>,
    pub position: Option<Position>,
    pub severity: Option<&'a Severity>,
}

/// Render the prefix, including the single space that separates it from the body.
pub fn render_prefix(out: &mut String, prefix: &Prefix<'_>, use_color: bool) {
    if let Some(program) = prefix.program {
        out.push_str(program);
        out.push(':');
    }

    if let Some(source) = prefix.source {
        out.push(' ');
        let located = format!("{source}:");
        push_styled(out, &located, LOCATION_STYLE, use_color);
    }

    if let Some(position) = prefix.position {
        push_styled(out, &position.to_string(), LOCATION_STYLE, use_color);
        out.push(':');
    }

    match prefix.severity.filter(|severity| !severity.label().is_empty()) {
        Some(severity) => {
            out.push(' ');
            match severity.style() {
                Some(style) => push_styled(out, severity.label(), style, use_color),
                None => out.push_str(severity.label()),
            }
            out.push(' ');
        }
        None => out.push(' '),
    }
}

/// Render a complete diagnostic line, newline included.
///
/// When `template` ends in a colon, a space and the description of `cause` are
/// appended, so `"open failed:"` reads `"open failed: No such file or directory"`.
pub fn render_line(
    prefix: &Prefix<'_>,
    template: &str,
    args: fmt::Arguments<'_>,
    cause: Option<&io::Error>,
    use_color: bool,
) -> String {
    let mut out = String::new();
    render_prefix(&mut out, prefix, use_color);
    let _ = out.write_fmt(args);

    if wants_cause(template) {
        out.push(' ');
        match cause {
            Some(err) => out.push_str(&describe_error(err)),
            None => out.push_str(&describe_error(&io::Error::other("Unknown error"))),
        }
    }

    out.push('\n');
    out
}

/// Whether a format template asks for the error description suffix.
pub fn wants_cause(template: &str) -> bool {
    template.ends_with(':')
}

/// Describe an error the way `strerror` would, without the `(os error N)` tail
/// that `io::Error` adds for raw OS errors.
pub fn describe_error(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {code})"))
            .map(str::to_string)
            .unwrap_or(text),
        None => text,
    }
}

/// The first `max` characters of `s`, never splitting a character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn push_styled(out: &mut String, text: &str, style: Style, use_color: bool) {
    if use_color {
        out.push_str(&style.paint(text));
    } else {
        out.push_str(text);
    }
}
