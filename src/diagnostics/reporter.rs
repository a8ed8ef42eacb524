//! The reporting context
//!
//! A [`Reporter`] owns everything a diagnostic prefix is built from: the
//! program and source names, the current source position and the color
//! policy. The lexer updates the position through [`Reporter::set_position`]
//! while scanning; every other phase reports through the same handle.
//!
//! The reporter is `!Sync`. A host that reports from several threads has to
//! wrap it in its own lock.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::{self, Write};
use std::process;

use tracing::{debug, trace};

use super::names::{ManagedProgramName, PlatformProgramName, ProgramName, basename};
use super::position::Position;
use super::rendering::{ColorChoice, Prefix, render_line};
use super::types::Severity;

/// Builder for [`Reporter`].
pub struct ReporterBuilder {
    sink: Option<Box<dyn Write>>,
    color: ColorChoice,
    program: Box<dyn ProgramName>,
    program_path: Option<String>,
    source_path: Option<String>,
}

impl Default for ReporterBuilder {
    fn default() -> Self {
        Self {
            sink: None,
            color: ColorChoice::Auto,
            program: Box::new(ManagedProgramName::new()),
            program_path: None,
            source_path: None,
        }
    }
}

impl ReporterBuilder {
    /// Write diagnostics to `sink` instead of stderr. `ColorChoice::Auto`
    /// never colors a custom sink.
    pub fn sink(mut self, sink: impl Write + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Use the program name the platform reports for this process.
    pub fn platform_program_name(mut self) -> Self {
        self.program = Box::new(PlatformProgramName::new());
        self
    }

    pub fn program_name_source(mut self, program: impl ProgramName + 'static) -> Self {
        self.program = Box::new(program);
        self
    }

    pub fn program_name(mut self, path: impl Into<String>) -> Self {
        self.program_path = Some(path.into());
        self
    }

    pub fn source_name(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub fn build(self) -> Reporter {
        let sink_is_stderr = self.sink.is_none();
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(io::stderr()) as Box<dyn Write>);
        let reporter = Reporter {
            sink: RefCell::new(sink),
            use_color: self.color.resolve(sink_is_stderr),
            program: RefCell::new(self.program),
            source: RefCell::new(None),
            position: Cell::new(Position::start()),
        };
        if let Some(path) = self.program_path {
            reporter.set_program_name(&path);
        }
        if let Some(path) = self.source_path {
            reporter.set_source_name(&path);
        }
        reporter
    }
}

/// Writes formatted diagnostics to the diagnostic stream.
pub struct Reporter {
    sink: RefCell<Box<dyn Write>>,
    use_color: bool,
    program: RefCell<Box<dyn ProgramName>>,
    source: RefCell<Option<String>>,
    position: Cell<Position>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    /// Reporter writing to stderr with automatic color detection.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ReporterBuilder {
        ReporterBuilder::default()
    }

    pub fn uses_color(&self) -> bool {
        self.use_color
    }

    // ===== Naming state =====

    pub fn set_program_name(&self, path: &str) {
        self.program.borrow_mut().set(path);
        debug!(program = basename(path), "program name installed");
    }

    pub fn program_name(&self) -> Option<String> {
        self.program.borrow().name().map(str::to_string)
    }

    pub fn release_program_name(&self) {
        self.program.borrow_mut().release();
        debug!("program name released");
    }

    pub fn set_source_name(&self, path: &str) {
        let name = basename(path).to_string();
        debug!(source = %name, "source name installed");
        *self.source.borrow_mut() = Some(name);
    }

    pub fn source_name(&self) -> Option<String> {
        self.source.borrow().clone()
    }

    pub fn release_source_name(&self) {
        self.source.borrow_mut().take();
        debug!("source name released");
    }

    // ===== Source position =====

    pub fn position(&self) -> Position {
        self.position.get()
    }

    pub fn set_position(&self, position: Position) {
        self.position.set(position);
    }

    /// Advance the current position past `ch`.
    pub fn advance(&self, ch: char) {
        let mut position = self.position.get();
        position.advance(ch);
        self.position.set(position);
    }

    pub fn reset_position(&self) {
        trace!("source position reset");
        self.position.set(Position::start());
    }

    // ===== Reporting =====

    /// Report an error without a source position and exit with status 2.
    pub fn error(&self, template: &str, args: fmt::Arguments<'_>) -> ! {
        self.fatal(&Severity::Error, None, template, args)
    }

    /// Report an error at the current source position and exit with status 2.
    pub fn error_at(&self, template: &str, args: fmt::Arguments<'_>) -> ! {
        self.fatal(&Severity::Error, Some(self.position()), template, args)
    }

    /// Report a warning without a source position. Always returns.
    pub fn warning(&self, template: &str, args: fmt::Arguments<'_>) {
        self.emit(&Severity::Warning, None, template, args, None);
    }

    /// Report a message with a caller-chosen tag at the current source
    /// position and exit with status 3. An empty tag prints no label.
    pub fn tagged_at(&self, tag: &str, template: &str, args: fmt::Arguments<'_>) -> ! {
        self.fatal(&Severity::tagged(tag), Some(self.position()), template, args)
    }

    /// Report a fatal diagnostic caused by `cause` and exit.
    pub(crate) fn fatal_with(
        &self,
        severity: &Severity,
        template: &str,
        args: fmt::Arguments<'_>,
        cause: io::Error,
    ) -> ! {
        self.emit(severity, None, template, args, Some(cause));
        self.terminate(severity)
    }

    fn fatal(
        &self,
        severity: &Severity,
        position: Option<Position>,
        template: &str,
        args: fmt::Arguments<'_>,
    ) -> ! {
        self.emit(severity, position, template, args, None);
        self.terminate(severity)
    }

    pub(crate) fn terminate(&self, severity: &Severity) -> ! {
        let _ = self.sink.borrow_mut().flush();
        process::exit(severity.exit_code().unwrap_or(0))
    }

    /// Assemble the prefix and write one diagnostic line.
    ///
    /// Without an explicit `cause`, a template ending in `:` is completed with
    /// the last OS error, captured before any output is attempted.
    pub(crate) fn emit(
        &self,
        severity: &Severity,
        position: Option<Position>,
        template: &str,
        args: fmt::Arguments<'_>,
        cause: Option<io::Error>,
    ) {
        let cause = cause.unwrap_or_else(io::Error::last_os_error);
        let _ = io::stdout().flush();

        let program = self.program.borrow();
        let source = self.source.borrow();
        let prefix = Prefix {
            program: program.name(),
            source: source.as_deref(),
            position,
            severity: Some(severity),
        };
        let line = render_line(&prefix, template, args, Some(&cause), self.use_color);

        let mut sink = self.sink.borrow_mut();
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }

    /// Flush pending output, then release the naming state.
    pub fn finish(self) {
        let _ = io::stdout().flush();
        let _ = self.sink.borrow_mut().flush();
        self.release_source_name();
        self.release_program_name();
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        let _ = self.sink.get_mut().flush();
    }
}
