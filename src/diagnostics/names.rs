//! Program and source names used as diagnostic prefixes
//!
//! The program name is a capability: some platforms supply it themselves
//! (`getprogname` and friends), others leave it to the application. Both are
//! modelled by [`ProgramName`].

use std::env;
use std::path::is_separator;

/// Keep only the final component of `path`.
///
/// A path without a separator is returned unchanged; a trailing separator
/// yields the empty string.
pub fn basename(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Source of the program name printed at the start of every diagnostic.
pub trait ProgramName {
    fn name(&self) -> Option<&str>;

    /// Install the final component of `path` as the program name.
    fn set(&mut self, path: &str);

    /// Release the stored name.
    fn release(&mut self);
}

/// Program name owned and managed by the application: unset until `set`.
#[derive(Debug, Clone, Default)]
pub struct ManagedProgramName {
    name: Option<String>,
}

impl ManagedProgramName {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgramName for ManagedProgramName {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set(&mut self, path: &str) {
        self.name = Some(basename(path).to_string());
    }

    fn release(&mut self) {
        self.name = None;
    }
}

/// Program name supplied by the platform, initialised from the executable
/// name the process was started with. The platform keeps ownership, so
/// releasing it has no effect.
#[derive(Debug, Clone)]
pub struct PlatformProgramName {
    name: Option<String>,
}

impl PlatformProgramName {
    pub fn new() -> Self {
        let arg0 = env::args_os().next();
        Self::from_arg0(arg0.as_ref().map(|arg0| arg0.to_string_lossy()).as_deref())
    }

    /// Name derived from an executable path; empty names count as unset.
    pub fn from_arg0(arg0: Option<&str>) -> Self {
        let name = arg0
            .map(basename)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Self { name }
    }
}

impl Default for PlatformProgramName {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramName for PlatformProgramName {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set(&mut self, path: &str) {
        self.name = Some(basename(path).to_string());
    }

    fn release(&mut self) {}
}
