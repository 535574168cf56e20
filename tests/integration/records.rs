//! Integration tests for lexer + scanner + record reader pipeline
//! Tests reading realistic integer blocks end to end

use fastint::ast::Span;
use fastint::lexer::{Lexer, Token};
use fastint::{FastIntError, FixedLayout, RecordReader, ScanError, ScanMode};

// Body of a VASP `<varray name="selective">`-style integer block.
const WHITESPACE_BLOCK: &str = concat!(
    "     1     1     0\n",
    "     0     1     1\n",
    "    12    -3 *****\n",
);

// The same values written with Fortran FORMAT(3I6); the overflowing value
// fills its whole column.
const FIXED_BLOCK: &str = concat!(
    "     1     1     0\n",
    "     0     1     1\n",
    "    12    -3******\n",
);

#[test]
fn test_lexer_feeds_reader_spans() {
    let mut lexer = Lexer::new(WHITESPACE_BLOCK);
    let tokens = lexer.tokenize();
    let fields: Vec<_> = tokens
        .iter()
        .filter(|token| token.token == Token::Field)
        .collect();

    assert_eq!(fields.len(), 9);
    assert_eq!(fields[0].span, Span::new(5, 6));
    assert_eq!(fields[8].text, "*****");
}

#[test]
fn test_whitespace_and_fixed_blocks_agree() {
    let layout = FixedLayout::parse("(3I6)").unwrap();

    let free = RecordReader::new(WHITESPACE_BLOCK)
        .read_rows(ScanMode::Strict)
        .unwrap();
    let fixed = RecordReader::new(FIXED_BLOCK)
        .read_fixed(&layout, ScanMode::Strict)
        .unwrap();

    assert_eq!(free, fixed);
    assert_eq!(free[2], vec![12, -3, i32::MAX]);
}

#[test]
fn test_flat_values() {
    let values = RecordReader::new(WHITESPACE_BLOCK)
        .read_values(ScanMode::Legacy)
        .unwrap();
    assert_eq!(values, vec![1, 1, 0, 0, 1, 1, 12, -3, i32::MAX]);
}

#[test]
fn test_strict_error_propagation() {
    let reader = RecordReader::new_with_filename("1 2 3\n4 - 6\n", "INCAR");
    let error = reader.read_rows(ScanMode::Strict).unwrap_err();

    match &error {
        FastIntError::Scan {
            source, field, line, ..
        } => {
            assert_eq!(*source, ScanError::EmptyInput);
            assert_eq!(field, "-");
            assert_eq!(*line, 2);
        }
        other => panic!("Expected scan error, got {other:?}"),
    }
    assert_eq!(error.span(), Some(Span::new(8, 9)));
}

#[test]
fn test_legacy_never_fails() {
    let reader = RecordReader::new("x\t-\n+1 2e5 ** 99999999999\n");
    let rows = reader.read_rows(ScanMode::Legacy).unwrap();

    assert_eq!(rows, vec![vec![0, 0], vec![0, 2, i32::MAX, 1_215_752_191]]);
}
