//! Integration tests for the scanner through the facade crate
//! Tests the documented behaviour of the legacy and strict paths side by side

use fastint::scanner::scan_prefix;
use fastint::{ScanError, Scanned, scan, scan_as, scan_strict};

#[test]
fn test_documented_examples() {
    let cases: &[(&str, i32)] = &[
        ("", 0),
        ("   \t 42", 42),
        ("-17", -17),
        ("*", i32::MAX),
        ("abc", 0),
        ("123abc", 123),
        ("-*", 0),
        ("007", 7),
    ];

    for &(input, expected) in cases {
        assert_eq!(scan(input), expected, "scan({input:?})");
    }
}

#[test]
fn test_strict_classifies_what_legacy_hides() {
    let cases: &[(&str, i32, Result<i32, ScanError>)] = &[
        ("", 0, Err(ScanError::EmptyInput)),
        ("  ", 0, Err(ScanError::EmptyInput)),
        (
            "abc",
            0,
            Err(ScanError::InvalidLeadingCharacter {
                found: 'a',
                offset: 0,
            }),
        ),
        (
            "+5",
            0,
            Err(ScanError::InvalidLeadingCharacter {
                found: '+',
                offset: 0,
            }),
        ),
        (
            "2147483648",
            i32::MIN,
            Err(ScanError::OutOfRange { offset: 9 }),
        ),
        ("*", i32::MAX, Ok(i32::MAX)),
        ("-42", -42, Ok(-42)),
    ];

    for (input, legacy, strict) in cases {
        assert_eq!(scan(*input), *legacy, "scan({input:?})");
        assert_eq!(scan_strict(*input), *strict, "scan_strict({input:?})");
    }
}

#[test]
fn test_widths_share_one_algorithm() {
    assert_eq!(scan_as::<i16, _>("  -123"), -123);
    assert_eq!(scan_as::<i64, _>("9223372036854775807"), i64::MAX);
    assert_eq!(scan_as::<i64, _>("2147483648"), 2_147_483_648);
    assert_eq!(scan_as::<i64, _>("*"), i64::MAX);
}

#[test]
fn test_walking_a_buffer_with_the_cursor() {
    // Callers step through a record by resuming after each scanned field.
    let record = b"   12   -7  ***   40";
    let mut cursor = 0;
    let mut values = Vec::new();

    while cursor < record.len() {
        let scanned: Scanned<i32> = scan_prefix(&record[cursor..]);
        values.push(scanned.value);
        cursor += scanned.consumed;
        while cursor < record.len() && record[cursor] == b'*' {
            cursor += 1;
        }
    }

    assert_eq!(values, vec![12, -7, i32::MAX, 40]);
}
