//! ANSI color codes for terminal output
//!
//! Colors are only emitted when the diagnostic stream is an interactive terminal
//! and the NO_COLOR environment variable is unset.

use std::env;
use std::io::{self, IsTerminal};

const ESC: &str = "\u{1b}[";

/// Sequence that restores the terminal's default rendition.
pub const RESET: &str = "\u{1b}[m";

/// The eight basic ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    fn offset(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }
}

/// A foreground color with optional bold and high-intensity attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
    pub high: bool,
}

impl Style {
    pub fn plain(color: Color) -> Self {
        Self {
            color,
            bold: false,
            high: false,
        }
    }

    pub fn bold(color: Color) -> Self {
        Self {
            color,
            bold: true,
            high: false,
        }
    }

    pub fn high(color: Color) -> Self {
        Self {
            color,
            bold: false,
            high: true,
        }
    }

    pub fn bold_high(color: Color) -> Self {
        Self {
            color,
            bold: true,
            high: true,
        }
    }

    /// Escape sequence that switches the terminal to this style, e.g. `ESC[1;31m`.
    pub fn escape(&self) -> String {
        let base = if self.high { 90 } else { 30 };
        let bold = if self.bold { "1;" } else { "" };
        format!("{ESC}{bold}{}m", base + self.color.offset())
    }

    /// Wrap `text` in this style and a trailing reset.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", self.escape(), text, RESET)
    }
}

/// When to colorize diagnostic prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color only when writing to an interactive stderr and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Parse the value of a `--color` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// Resolve the choice for a sink. Only stderr can qualify in `Auto` mode.
    pub fn resolve(self, sink_is_stderr: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                sink_is_stderr && !colors_disabled() && io::stderr().is_terminal()
            }
        }
    }
}

/// Check if colors should be disabled
pub fn colors_disabled() -> bool {
    env::var_os("NO_COLOR").is_some()
}
