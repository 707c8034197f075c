//! Prefix-match tables for the textual data-type and interleaving fields of
//! the imagery options record.
use crate::types::{DataType, Interleaving};

pub static DATA_TYPE_TOKENS: &[(&str, DataType)] = &[
    ("IU1", DataType::UChar),
    ("IU2", DataType::UShort),
    ("UI1", DataType::UChar),
    ("UI2", DataType::UShort),
    ("CI*2", DataType::ComplexChar),
    ("CI*4", DataType::ComplexShort),
    ("CIS4", DataType::ComplexShort),
    ("CI*8", DataType::ComplexLong),
    ("C*8", DataType::ComplexFloat),
    ("R*4", DataType::Float),
];

// The leading-space variants cover products whose field is shifted by a byte.
pub static INTERLEAVING_TOKENS: &[(&str, Interleaving)] = &[
    ("BSQ", Interleaving::Band),
    (" BSQ", Interleaving::Band),
    ("BIL", Interleaving::Line),
    (" BIL", Interleaving::Line),
];

/// Value of the first token that is a byte prefix of `text`, or the type's
/// default (`Unknown`) when none is.
pub fn lookup<T: Copy + Default>(table: &[(&str, T)], text: &str) -> T {
    table
        .iter()
        .find(|(token, _)| text.as_bytes().starts_with(token.as_bytes()))
        .map(|(_, value)| *value)
        .unwrap_or_default()
}
