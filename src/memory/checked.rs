//! Checked allocation
//!
//! The `try_*` functions report failure through [`AllocError`]. The
//! `*_or_die` wrappers on [`Reporter`] turn a failure into a fatal error
//! (exit status 2) and the `*_or_warn` wrappers into a single warning line
//! followed by `None`.

use tracing::debug;

use crate::diagnostics::rendering::truncate_chars;
use crate::diagnostics::{Reporter, Severity};

use super::error::AllocError;

/// Characters of the input quoted in a failed string duplication message.
const STRDUP_QUOTE_LIMIT: usize = 20;

/// Allocate a zero-filled block of exactly `size` bytes.
pub fn try_alloc(size: usize) -> Result<Vec<u8>, AllocError> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(size)
        .map_err(|err| AllocError::from_reserve(size, err))?;
    block.resize(size, 0);
    Ok(block)
}

/// Resize `block` to `size` bytes, zero-filling any growth.
/// On failure `block` is left untouched.
pub fn try_realloc(block: &mut Vec<u8>, size: usize) -> Result<(), AllocError> {
    if size > block.len() {
        block
            .try_reserve_exact(size - block.len())
            .map_err(|err| AllocError::from_reserve(size, err))?;
        block.resize(size, 0);
    } else {
        block.truncate(size);
        block.shrink_to(size);
    }
    Ok(())
}

/// Copy `s` into newly allocated storage owned by the caller.
pub fn try_strdup(s: &str) -> Result<String, AllocError> {
    let mut copy = String::new();
    copy.try_reserve_exact(s.len())
        .map_err(|err| AllocError::from_reserve(s.len(), err))?;
    copy.push_str(s);
    Ok(copy)
}

impl Reporter {
    pub fn alloc_or_die(&self, size: usize) -> Vec<u8> {
        match try_alloc(size) {
            Ok(block) => block,
            Err(err) => self.fatal_with(
                &Severity::Error,
                "malloc of {} bytes failed:",
                format_args!("malloc of {} bytes failed:", size),
                err.into(),
            ),
        }
    }

    pub fn alloc_or_warn(&self, size: usize) -> Option<Vec<u8>> {
        match try_alloc(size) {
            Ok(block) => Some(block),
            Err(err) => {
                debug!(requested = size, error = %err, "allocation failed");
                self.emit(
                    &Severity::Warning,
                    None,
                    "malloc of {} bytes failed:",
                    format_args!("malloc of {} bytes failed:", size),
                    Some(err.into()),
                );
                None
            }
        }
    }

    pub fn realloc_or_die(&self, mut block: Vec<u8>, size: usize) -> Vec<u8> {
        match try_realloc(&mut block, size) {
            Ok(()) => block,
            Err(err) => self.fatal_with(
                &Severity::Error,
                "realloc of {} bytes failed:",
                format_args!("realloc of {} bytes failed:", size),
                err.into(),
            ),
        }
    }

    /// Resize `block` in place. On failure a warning is printed, `block` keeps
    /// its previous contents and `None` is returned.
    pub fn realloc_or_warn<'a>(
        &self,
        block: &'a mut Vec<u8>,
        size: usize,
    ) -> Option<&'a mut Vec<u8>> {
        match try_realloc(block, size) {
            Ok(()) => Some(block),
            Err(err) => {
                debug!(requested = size, error = %err, "reallocation failed");
                self.emit(
                    &Severity::Warning,
                    None,
                    "realloc of {} bytes failed:",
                    format_args!("realloc of {} bytes failed:", size),
                    Some(err.into()),
                );
                None
            }
        }
    }

    pub fn strdup_or_die(&self, s: &str) -> String {
        match try_strdup(s) {
            Ok(copy) => copy,
            Err(err) => {
                self.report_strdup_failure(&Severity::Error, s, err);
                self.terminate(&Severity::Error)
            }
        }
    }

    pub fn strdup_or_warn(&self, s: &str) -> Option<String> {
        match try_strdup(s) {
            Ok(copy) => Some(copy),
            Err(err) => {
                self.report_strdup_failure(&Severity::Warning, s, err);
                None
            }
        }
    }

    /// Quotes at most the first 20 characters of `s`.
    fn report_strdup_failure(&self, severity: &Severity, s: &str, err: AllocError) {
        debug!(requested = s.len(), error = %err, "string duplication failed");
        self.emit(
            severity,
            None,
            "estrdup(\"{}\") failed:",
            format_args!("estrdup(\"{}\") failed:", truncate_chars(s, STRDUP_QUOTE_LIMIT)),
            Some(err.into()),
        );
    }
}
