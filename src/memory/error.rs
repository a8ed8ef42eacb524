use std::collections::TryReserveError;
use std::fmt;
use std::io;

/// Failure to obtain memory for a block or string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The request exceeds what any allocation can hold
    CapacityOverflow { requested: usize },
    /// The allocator could not satisfy the request
    Exhausted { requested: usize },
}

impl AllocError {
    pub(crate) fn from_reserve(requested: usize, _err: TryReserveError) -> Self {
        if requested > isize::MAX as usize {
            AllocError::CapacityOverflow { requested }
        } else {
            AllocError::Exhausted { requested }
        }
    }

    /// Number of bytes that were asked for.
    pub fn requested(&self) -> usize {
        match *self {
            AllocError::CapacityOverflow { requested } | AllocError::Exhausted { requested } => {
                requested
            }
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::CapacityOverflow { requested } => {
                write!(f, "allocation of {requested} bytes exceeds the maximum capacity")
            }
            AllocError::Exhausted { requested } => {
                write!(f, "allocation of {requested} bytes failed")
            }
        }
    }
}

impl std::error::Error for AllocError {}

impl From<AllocError> for io::Error {
    /// The error the platform reports for an exhausted allocator, so the
    /// description reads `Cannot allocate memory` where `strerror` would.
    fn from(_err: AllocError) -> Self {
        out_of_memory()
    }
}

// ENOMEM has the same value on every Unix this builds for.
#[cfg(unix)]
fn out_of_memory() -> io::Error {
    io::Error::from_raw_os_error(12)
}

#[cfg(not(unix))]
fn out_of_memory() -> io::Error {
    io::Error::from(io::ErrorKind::OutOfMemory)
}
