//! A single-pass, streaming delimiter-matching tokenizer.
//!
//! `delimscan` walks a borrowed sequence of elements one element at a time,
//! tracking nested opening delimiters on a stack and emitting a token
//! boundary every time a delimiter is consumed. It is a small pushdown
//! automaton: it validates that delimiters nest correctly, honors a
//! designated escape element, recognizes self-pairing delimiters (such as
//! quotes) by stack context, and reports structured errors for unmatched,
//! unterminated, or mismatched delimiters.
//!
//! The automaton is strictly forward-only and performs no I/O. Tokens are
//! zero-copy subslices of the source, which must outlive the scanner.
//!
//! # Examples
//!
//! ```rust
//! use delimscan::{DelimiterTable, Scanner};
//!
//! // Slot 0 is the escape element; the rest are (opening, closing) pairs.
//! let table = DelimiterTable::new(vec!['\\', '(', ')']).unwrap();
//! let source: Vec<char> = "f(x)".chars().collect();
//!
//! let mut scanner = Scanner::new(&source, &table);
//! let tokens: Vec<&[char]> = scanner.tokens().collect::<Result<_, _>>().unwrap();
//!
//! assert_eq!(tokens, [&['f'][..], &['x'][..]]);
//! assert_eq!(scanner.stack_depth(), 0);
//! ```
//!
//! Byte and `&str` sources go through [`ByteScanner`], which yields
//! [`bstr::BStr`] tokens so non-UTF-8 slices still print sensibly.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod scanner;
mod table;
mod text;

#[cfg(test)]
mod tests;

pub use error::{ScanError, TableError};
pub use scanner::{Scanner, Tokens};
pub use table::DelimiterTable;
pub use text::{ByteScanner, ByteTokens};
