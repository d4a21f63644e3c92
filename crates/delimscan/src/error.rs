use alloc::vec::Vec;

use thiserror::Error;

/// A malformed delimiter table, rejected at construction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableError {
    /// The table does not contain an escape element followed by at least one
    /// delimiter pair.
    #[error("delimiter table needs an escape element and at least one pair")]
    MissingPairs,
    /// The delimiter slots after the escape element do not form complete
    /// pairs.
    #[error("delimiter slots must alternate opening/closing roles, got {0} slots")]
    UnpairedSlot(usize),
}

/// A nesting violation detected while scanning.
///
/// Scan errors are *sticky and terminal*: the scanner records the first one
/// and every later [`advance`] call returns it again without mutating any
/// state. Recovery — resynchronizing, retrying — is entirely a caller
/// policy; the scanner itself must be discarded.
///
/// Each variant carries the structural facts a reporter needs; rendering
/// them for humans (beyond the derived [`Display`]) is the caller's job.
///
/// [`advance`]: crate::Scanner::advance
/// [`Display`]: core::fmt::Display
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanError<T> {
    /// An unescaped closing delimiter appeared while no delimiter was open.
    #[error("closing delimiter {close:?} at position {position} has no opening complement")]
    NoOpeningDelimiter {
        /// The closing delimiter that was found.
        close: T,
        /// Source position of the offending element.
        position: usize,
    },
    /// The source ended while one or more delimiters were still open.
    #[error("{} delimiter(s) left open at end of input", open.len())]
    NoClosingDelimiter {
        /// The still-open opening delimiters, innermost first.
        open: Vec<T>,
    },
    /// An unescaped closing delimiter did not pair with the innermost open
    /// delimiter.
    #[error("opening delimiter {expected:?} does not pair with closing delimiter {found:?} at position {position}")]
    MismatchedDelimiter {
        /// The innermost open delimiter at the time of the mismatch.
        expected: T,
        /// The closing delimiter that was found instead of its partner.
        found: T,
        /// Source position of the offending element.
        position: usize,
    },
}

impl<T> ScanError<T> {
    /// Numeric code for this error kind.
    ///
    /// Kept as a reporting convention: `-1` for a missing opening
    /// complement, `-2` for delimiters left open at end of input, `-3` for a
    /// mismatched pair.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            ScanError::NoOpeningDelimiter { .. } => -1,
            ScanError::NoClosingDelimiter { .. } => -2,
            ScanError::MismatchedDelimiter { .. } => -3,
        }
    }
}
