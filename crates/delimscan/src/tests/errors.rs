use alloc::{format, vec, vec::Vec};

use rstest::rstest;

use crate::{DelimiterTable, ScanError, Scanner, TableError};

fn table() -> DelimiterTable<u8> {
    DelimiterTable::from_bytes(b"\\()[]").unwrap()
}

/// Drives the scanner to its terminal error.
fn scan_to_error(source: &[u8], table: &DelimiterTable<u8>) -> ScanError<u8> {
    let mut scanner = Scanner::new(source, table);
    scanner.tokens().last().unwrap().unwrap_err()
}

#[rstest]
#[case::unmatched_close(b")".as_slice(), -1)]
#[case::unterminated_open(b"(a".as_slice(), -2)]
#[case::mismatched_pair(b"(a]".as_slice(), -3)]
fn error_codes(#[case] source: &[u8], #[case] code: i32) {
    let table = table();
    assert_eq!(scan_to_error(source, &table).code(), code);
}

#[test]
fn unmatched_close_detected_in_place() {
    let table = table();
    let mut scanner = Scanner::new(b")", &table);

    let err = scanner.advance().unwrap_err();
    assert_eq!(
        err,
        ScanError::NoOpeningDelimiter {
            close: b')',
            position: 0,
        }
    );
    // The failing element is not consumed and the stack is untouched.
    assert_eq!(scanner.position(), 0);
    assert_eq!(scanner.stack_depth(), 0);
}

#[test]
fn unterminated_opens_listed_innermost_first() {
    let table = table();
    let err = scan_to_error(b"([a", &table);

    assert_eq!(
        err,
        ScanError::NoClosingDelimiter {
            open: vec![b'[', b'('],
        }
    );
}

#[test]
fn unterminated_open_keeps_stack_at_failure() {
    let table = table();
    let mut scanner = Scanner::new(b"(a", &table);

    assert_eq!(scanner.advance(), Ok(Some(b"".as_slice())));
    let err = scanner.advance().unwrap_err();
    assert_eq!(err.code(), -2);
    assert_eq!(scanner.stack_depth(), 1);
}

#[test]
fn mismatch_reports_both_delimiters() {
    let table = table();
    let mut scanner = Scanner::new(b"(a]", &table);

    scanner.advance().unwrap();
    scanner.advance().unwrap();
    let err = scanner.advance().unwrap_err();

    assert_eq!(
        err,
        ScanError::MismatchedDelimiter {
            expected: b'(',
            found: b']',
            position: 2,
        }
    );
    assert_eq!(scanner.stack_depth(), 1);
}

#[test]
fn open_as_final_element_reports_no_closing() {
    let table = table();
    let mut scanner = Scanner::new(b"(", &table);

    // The push succeeds, but end-of-input reconciliation in the same call
    // finds the stack non-empty; the error wins over the boundary token.
    let err = scanner.advance().unwrap_err();
    assert_eq!(err, ScanError::NoClosingDelimiter { open: vec![b'('] });
    assert_eq!(scanner.stack_depth(), 1);
}

#[test]
fn errors_are_sticky_and_mutation_free() {
    let table = table();
    let mut scanner = Scanner::new(b"(a]x", &table);

    scanner.advance().unwrap();
    scanner.advance().unwrap();
    let err = scanner.advance().unwrap_err();

    let position = scanner.position();
    let depth = scanner.stack_depth();
    for _ in 0..4 {
        assert_eq!(scanner.advance(), Err(err.clone()));
        assert_eq!(scanner.position(), position);
        assert_eq!(scanner.stack_depth(), depth);
    }
    assert_eq!(scanner.error(), Some(&err));
}

#[test]
fn display_names_the_failure() {
    let table = table();

    let err = scan_to_error(b")", &table);
    assert!(format!("{err}").contains("no opening complement"));

    let err = scan_to_error(b"([a", &table);
    assert!(format!("{err}").contains("left open at end of input"));

    let err = scan_to_error(b"(a]", &table);
    assert!(format!("{err}").contains("does not pair with"));
}

#[rstest]
#[case::empty(Vec::new(), TableError::MissingPairs)]
#[case::escape_only(vec![b'\\'], TableError::MissingPairs)]
#[case::lone_slot(vec![b'\\', b'('], TableError::MissingPairs)]
#[case::dangling_open(vec![b'\\', b'(', b')', b'['], TableError::UnpairedSlot(3))]
fn malformed_tables_rejected(#[case] slots: Vec<u8>, #[case] expected: TableError) {
    assert_eq!(DelimiterTable::new(slots).unwrap_err(), expected);
}
