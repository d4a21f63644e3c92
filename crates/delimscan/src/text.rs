//! Byte-string binding of the automaton.
//!
//! The core [`Scanner`] is generic over any `PartialEq + Clone` element; this
//! module specializes the *source representation* only. [`ByteScanner`] runs
//! the generic automaton over `&[u8]` and hands tokens out as [`BStr`]
//! slices, so sources that are not valid UTF-8 still debug-print and display
//! as text. Code-point sources need no adapter at all: `Scanner<'_, char>`
//! over a `&[char]` works directly.

use alloc::vec::Vec;

use bstr::BStr;

use crate::{
    error::{ScanError, TableError},
    scanner::{Scanner, Tokens},
    table::DelimiterTable,
};

impl DelimiterTable<u8> {
    /// Builds a byte table from a slot string: escape byte first, then
    /// opening/closing pairs.
    ///
    /// # Errors
    ///
    /// Same shape validation as [`DelimiterTable::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delimscan::DelimiterTable;
    ///
    /// let table = DelimiterTable::from_bytes(br#"\()[]"#).unwrap();
    /// assert_eq!(table.pair_count(), 2);
    /// ```
    pub fn from_bytes(slots: &[u8]) -> Result<Self, TableError> {
        Self::new(slots.to_vec())
    }
}

impl DelimiterTable<char> {
    /// Builds a character table from a slot string: escape character first,
    /// then opening/closing pairs.
    ///
    /// # Errors
    ///
    /// Same shape validation as [`DelimiterTable::new`].
    pub fn from_chars(slots: &str) -> Result<Self, TableError> {
        Self::new(slots.chars().collect::<Vec<_>>())
    }
}

/// A [`Scanner`] over bytes that yields [`BStr`] tokens.
///
/// Thin wrapper: every query delegates to the inner automaton; only the
/// token type changes. Delimiters split the source at exact byte values, so
/// multi-byte sequences are never delimiters — use `Scanner<'_, char>` when
/// delimiters are not single bytes.
///
/// # Examples
///
/// ```rust
/// use delimscan::{ByteScanner, DelimiterTable};
///
/// let table = DelimiterTable::from_bytes(b"\\()").unwrap();
/// let mut scanner = ByteScanner::new("f(x)", &table);
/// let tokens: Vec<_> = scanner.tokens().collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens, ["f", "x"]);
/// ```
#[derive(Debug, Clone)]
pub struct ByteScanner<'a> {
    inner: Scanner<'a, u8>,
}

impl<'a> ByteScanner<'a> {
    /// Creates a byte scanner over `source`, which may be any byte-viewable
    /// sequence (`&str`, `&[u8]`, a byte array).
    #[must_use]
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S, table: &'a DelimiterTable<u8>) -> Self {
        Self {
            inner: Scanner::new(source.as_ref(), table),
        }
    }

    /// Consumes one byte; see [`Scanner::advance`].
    ///
    /// # Errors
    ///
    /// Same error conditions as [`Scanner::advance`].
    pub fn advance(&mut self) -> Result<Option<&'a BStr>, ScanError<u8>> {
        self.inner.advance().map(|token| token.map(BStr::new))
    }

    /// Iterates over the remaining tokens; see [`Scanner::tokens`].
    pub fn tokens(&mut self) -> ByteTokens<'_, 'a> {
        ByteTokens {
            inner: self.inner.tokens(),
        }
    }

    /// Position of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.inner.position()
    }

    /// The recorded terminal error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ScanError<u8>> {
        self.inner.error()
    }

    /// Number of currently open delimiters.
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.inner.stack_depth()
    }

    /// Whether the previously consumed byte was an unconsumed escape marker.
    #[must_use]
    pub fn escape_pending(&self) -> bool {
        self.inner.escape_pending()
    }

    /// Opening slot of the most recently pushed delimiter.
    #[must_use]
    pub fn last_pushed(&self) -> Option<usize> {
        self.inner.last_pushed()
    }

    /// Opening slot of the delimiter popped by the most recent advance.
    #[must_use]
    pub fn last_popped(&self) -> Option<usize> {
        self.inner.last_popped()
    }

    /// Whether every source byte has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }

    /// The pending token so far; see [`Scanner::portion`].
    pub fn portion(&mut self, consume_boundary: bool) -> &'a BStr {
        BStr::new(self.inner.portion(consume_boundary))
    }
}

/// Fused iterator over a [`ByteScanner`]'s remaining tokens.
#[derive(Debug)]
pub struct ByteTokens<'s, 'a> {
    inner: Tokens<'s, 'a, u8>,
}

impl<'a> Iterator for ByteTokens<'_, 'a> {
    type Item = Result<&'a BStr, ScanError<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|token| token.map(BStr::new))
    }
}

impl core::iter::FusedIterator for ByteTokens<'_, '_> {}
