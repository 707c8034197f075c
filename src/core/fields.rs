//! Typed decoding of fixed-position record fields.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::io::record::Record;

/// How a field's bytes are encoded.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Encoding {
    /// Free ASCII text (`A` fields).
    Alphanumeric,
    /// Decimal integer written as ASCII (`I` fields).
    AsciiInteger,
    /// Big-endian binary integer (`B` fields).
    Binary,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field at offset {offset} (length {length}) lies outside a {record_length}-byte record")]
    OutOfRange {
        offset: usize,
        length: usize,
        record_length: usize,
    },
    #[error("Unsupported binary field width: {0} bytes")]
    UnsupportedWidth(usize),
}

/// Decode an integer field. Text that holds no number decodes as `0`.
pub fn extract_integer(
    record: &dyn Record,
    encoding: Encoding,
    offset: usize,
    length: usize,
) -> Result<i64, FieldError> {
    if encoding == Encoding::Binary && !matches!(length, 1 | 2 | 4) {
        return Err(FieldError::UnsupportedWidth(length));
    }

    let bytes = record
        .field(offset, length)
        .ok_or(FieldError::OutOfRange {
            offset,
            length,
            record_length: record.length(),
        })?;

    Ok(match encoding {
        Encoding::Alphanumeric | Encoding::AsciiInteger => parse_leading_int(bytes),
        Encoding::Binary => bytes.iter().fold(0i64, |acc, b| (acc << 8) | i64::from(*b)),
    })
}

/// Read a text field as exactly `length` characters, padding with spaces
/// where the record ends early.
pub fn extract_string(record: &dyn Record, offset: usize, length: usize) -> String {
    let available = (0..=length)
        .rev()
        .find_map(|n| record.field(offset, n))
        .unwrap_or(&[]);

    let mut text: String = available.iter().map(|&b| char::from(b)).collect();
    text.extend(std::iter::repeat_n(' ', length - available.len()));
    text
}

/// Case-insensitive prefix test used for the signature strings.
pub fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

// Leading whitespace, optional sign, then as many digits as follow.
fn parse_leading_int(bytes: &[u8]) -> i64 {
    let mut rest = bytes
        .iter()
        .skip_while(|b| b.is_ascii_whitespace())
        .peekable();

    let negative = match rest.peek() {
        Some(b'-') => {
            rest.next();
            true
        }
        Some(b'+') => {
            rest.next();
            false
        }
        _ => false,
    };

    let value = rest
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -value } else { value }
}
