//! The delimiter-matching automaton.
//!
//! This module provides the [`Scanner`], a pushdown automaton that consumes
//! one source element per [`advance`] call, maintains a stack of open
//! delimiters, and emits zero-copy token slices at delimiter boundaries.
//!
//! # Examples
//!
//! ```rust
//! use delimscan::{DelimiterTable, Scanner};
//!
//! let table = DelimiterTable::new(vec![b'\\', b'(', b')']).unwrap();
//! let source = b"f(x) g";
//! let mut scanner = Scanner::new(source, &table);
//! for token in scanner.tokens() {
//!     let token = token.unwrap();
//!     println!("{token:?}");
//! }
//! ```
//!
//! [`advance`]: Scanner::advance

use alloc::vec::Vec;

use crate::{error::ScanError, table::DelimiterTable};

/// A single-pass pushdown automaton over a borrowed source sequence.
///
/// The scanner borrows both the source and the [`DelimiterTable`] for its
/// whole lifetime; the borrow checker guarantees neither can be mutated
/// while the scanner is alive. Tokens are subslices of the source and stay
/// valid after the scanner is dropped.
///
/// Driving the scanner is one logical pass: repeated [`advance`] calls, or
/// the [`tokens`] iterator wrapping them. The pass is finite, lazy, and not
/// restartable. The first nesting violation is recorded as a sticky
/// terminal [`ScanError`]; after that every call reports the same error and
/// mutates nothing.
///
/// Emitted tokens are the raw source slices between delimiters: escape
/// markers are *not* stripped. The escape element only neutralizes the
/// delimiter meaning of the element that follows it.
///
/// [`advance`]: Scanner::advance
/// [`tokens`]: Scanner::tokens
#[derive(Debug, Clone)]
pub struct Scanner<'a, T> {
    source: &'a [T],
    table: &'a DelimiterTable<T>,

    /// Opening-role slot indices of currently open delimiters, innermost on
    /// top.
    stack: Vec<usize>,

    /// First element of the pending token.
    token_start: usize,
    /// Next unread element.
    pos: usize,
    /// The previous element was an unconsumed escape marker.
    escape_pending: bool,

    error: Option<ScanError<T>>,

    last_pushed: Option<usize>,
    last_popped: Option<usize>,
}

impl<'a, T: PartialEq + Clone> Scanner<'a, T> {
    /// Creates a scanner over `source` driven by `table`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delimscan::{DelimiterTable, Scanner};
    ///
    /// let table = DelimiterTable::new(vec!['\\', '"', '"']).unwrap();
    /// let source: Vec<char> = r#"say "hi""#.chars().collect();
    /// let scanner = Scanner::new(&source, &table);
    /// assert_eq!(scanner.position(), 0);
    /// ```
    #[must_use]
    pub fn new(source: &'a [T], table: &'a DelimiterTable<T>) -> Self {
        Self {
            source,
            table,
            stack: Vec::new(),
            token_start: 0,
            pos: 0,
            escape_pending: false,
            error: None,
            last_pushed: None,
            last_popped: None,
        }
    }

    /// Consumes exactly one source element and updates the automaton.
    ///
    /// Returns:
    /// * `Ok(Some(token))` – a delimiter was consumed and the elements since
    ///   the previous boundary form a token (possibly empty, when two
    ///   delimiters are adjacent), or the source was exhausted and the
    ///   trailing token is emitted.
    /// * `Ok(None)` – a plain or escape element was consumed, or the source
    ///   was already exhausted (the call is a no-op).
    /// * `Err(error)` – a nesting violation; the error is also recorded and
    ///   every later call returns it again without mutating state.
    ///
    /// The last-popped tracker is reset at the *start* of each call, so its
    /// value must be read before the next `advance`.
    ///
    /// # Errors
    ///
    /// [`ScanError::NoOpeningDelimiter`] for an unescaped closer with no
    /// open delimiter, [`ScanError::MismatchedDelimiter`] for a closer whose
    /// partner is not the innermost open delimiter, and
    /// [`ScanError::NoClosingDelimiter`] when the source ends with open
    /// delimiters.
    pub fn advance(&mut self) -> Result<Option<&'a [T]>, ScanError<T>> {
        self.last_popped = None;

        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.pos >= self.source.len() {
            return Ok(None);
        }

        let current = &self.source[self.pos];

        if self.escape_pending {
            // The escaped element is consumed literally, whatever it is.
            self.escape_pending = false;
            self.pos += 1;
            return self.reconcile(None);
        }

        if current == self.table.escape() {
            self.escape_pending = true;
            self.pos += 1;
            return self.reconcile(None);
        }

        // Single ascending pass over the delimiter slots; the first value
        // match wins. Tables with duplicate values shadow later slots.
        for slot in 1..self.table.slot_count() {
            if self.table.value(slot) != current {
                continue;
            }

            if self.table.is_opening(slot) {
                if self.stack.last() == Some(&slot) && self.table.value(slot + 1) == current {
                    // Self-pairing delimiter already open: this occurrence
                    // closes it.
                    self.stack.pop();
                    self.last_popped = Some(slot);
                } else {
                    self.stack.push(slot);
                    self.last_pushed = Some(slot);
                }
            } else {
                let open_slot = slot - 1;
                match self.stack.last().copied() {
                    None => {
                        return Err(self.fail(ScanError::NoOpeningDelimiter {
                            close: current.clone(),
                            position: self.pos,
                        }));
                    }
                    Some(top) if top == open_slot => {
                        self.stack.pop();
                        self.last_popped = Some(top);
                    }
                    Some(top) => {
                        return Err(self.fail(ScanError::MismatchedDelimiter {
                            expected: self.table.value(top).clone(),
                            found: current.clone(),
                            position: self.pos,
                        }));
                    }
                }
            }

            let token = self.pending(self.pos);
            self.token_start = self.pos + 1;
            self.pos += 1;
            return self.reconcile(Some(token));
        }

        // Plain element.
        self.pos += 1;
        self.reconcile(None)
    }

    /// End-of-input reconciliation, run after every non-error consumption.
    ///
    /// When the final element has just been consumed: a non-empty stack
    /// turns into [`ScanError::NoClosingDelimiter`]; otherwise the trailing
    /// token is emitted. A boundary token produced by the same call already
    /// covers everything up to the end, so it is returned as-is.
    fn reconcile(&mut self, token: Option<&'a [T]>) -> Result<Option<&'a [T]>, ScanError<T>> {
        if self.pos < self.source.len() {
            return Ok(token);
        }

        if !self.stack.is_empty() {
            let open = self
                .stack
                .iter()
                .rev()
                .map(|&slot| self.table.value(slot).clone())
                .collect();
            return Err(self.fail(ScanError::NoClosingDelimiter { open }));
        }

        match token {
            Some(token) => Ok(Some(token)),
            None => Ok(Some(self.pending(self.source.len()))),
        }
    }

    /// Slice from the current token start to `end`, empty when the token
    /// start has already been moved past `end` by a boundary.
    fn pending(&self, end: usize) -> &'a [T] {
        if self.token_start > end {
            &[]
        } else {
            &self.source[self.token_start..end]
        }
    }

    /// Records `error` as the sticky terminal state and hands back a copy
    /// for the caller.
    fn fail(&mut self, error: ScanError<T>) -> ScanError<T> {
        self.error = Some(error.clone());
        error
    }

    /// Iterates over the remaining tokens.
    ///
    /// The iterator drives [`advance`] past elements that produce no token,
    /// yields each token, yields a scan error at most once, and then ends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delimscan::{DelimiterTable, Scanner};
    ///
    /// let table = DelimiterTable::new(vec![b'\\', b'[', b']']).unwrap();
    /// let mut scanner = Scanner::new(b"a[b]c", &table);
    /// let tokens: Vec<&[u8]> = scanner.tokens().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(tokens, [b"a".as_slice(), b"b", b"c"]);
    /// ```
    ///
    /// [`advance`]: Scanner::advance
    pub fn tokens(&mut self) -> Tokens<'_, 'a, T> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    // --------------------------------------------------------------------
    // Queries
    // --------------------------------------------------------------------

    /// Position of the next unread element.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The recorded terminal error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ScanError<T>> {
        self.error.as_ref()
    }

    /// Number of currently open delimiters.
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the previously consumed element was an unconsumed escape
    /// marker.
    #[must_use]
    pub fn escape_pending(&self) -> bool {
        self.escape_pending
    }

    /// Opening slot of the most recently pushed delimiter.
    #[must_use]
    pub fn last_pushed(&self) -> Option<usize> {
        self.last_pushed
    }

    /// Opening slot of the delimiter popped by the most recent [`advance`]
    /// call.
    ///
    /// Cleared at the start of the *next* call, not when read: a caller
    /// interested in it must query immediately after the call that popped.
    ///
    /// [`advance`]: Scanner::advance
    #[must_use]
    pub fn last_popped(&self) -> Option<usize> {
        self.last_popped
    }

    /// Whether every source element has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The pending token so far: the slice from the current token start to
    /// the read position (exclusive).
    ///
    /// With `consume_boundary` the token start is moved past the current
    /// element, as if a delimiter boundary had been taken here.
    pub fn portion(&mut self, consume_boundary: bool) -> &'a [T] {
        let portion = self.pending(self.pos);
        if consume_boundary {
            self.token_start = self.pos + 1;
        }
        portion
    }
}

/// Fused iterator over a scanner's remaining tokens.
///
/// Returned by [`Scanner::tokens`]. Yields `Ok` tokens, then either ends at
/// the end of the source or yields the terminal [`ScanError`] exactly once
/// and ends.
#[derive(Debug)]
pub struct Tokens<'s, 'a, T> {
    scanner: &'s mut Scanner<'a, T>,
    done: bool,
}

impl<'a, T: PartialEq + Clone> Iterator for Tokens<'_, 'a, T> {
    type Item = Result<&'a [T], ScanError<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if self.scanner.is_exhausted() && self.scanner.error.is_none() {
                self.done = true;
                return None;
            }
            match self.scanner.advance() {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => {}
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<T: PartialEq + Clone> core::iter::FusedIterator for Tokens<'_, '_, T> {}
