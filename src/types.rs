//! Shared types and enums used across SARCEOS.
//! Includes the CEOS pixel `DataType` and channel `Interleaving` codes and the
//! report `OutputFormat` used by the CLI and API.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Pixel data type of a CEOS image. Discriminants are the numeric codes used
/// by CEOS readers; `Unknown` (0) means the type could not be resolved.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    Unknown = 0,
    Char = 1,
    UChar = 2,
    Short = 3,
    UShort = 4,
    Long = 5,
    ULong = 6,
    Float = 7,
    Double = 8,
    ComplexChar = 9,
    ComplexUChar = 10,
    ComplexShort = 11,
    ComplexUShort = 12,
    ComplexLong = 13,
    ComplexULong = 14,
    ComplexFloat = 15,
    ComplexDouble = 16,
    /// SIR-C compressed cross-products, decoded to complex float.
    CompressedCrossProduct = 17,
    /// PALSAR 18-byte polarimetric format, decoded to complex short.
    PalsarComplexShort = 18,
}

impl DataType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_known(self) -> bool {
        self != DataType::Unknown
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DataType::Unknown => "Unknown",
            DataType::Char => "Char",
            DataType::UChar => "UChar",
            DataType::Short => "Short",
            DataType::UShort => "UShort",
            DataType::Long => "Long",
            DataType::ULong => "ULong",
            DataType::Float => "Float",
            DataType::Double => "Double",
            DataType::ComplexChar => "ComplexChar",
            DataType::ComplexUChar => "ComplexUChar",
            DataType::ComplexShort => "ComplexShort",
            DataType::ComplexUShort => "ComplexUShort",
            DataType::ComplexLong => "ComplexLong",
            DataType::ComplexULong => "ComplexULong",
            DataType::ComplexFloat => "ComplexFloat",
            DataType::ComplexDouble => "ComplexDouble",
            DataType::CompressedCrossProduct => "CompressedCrossProduct",
            DataType::PalsarComplexShort => "PalsarComplexShort",
        };
        write!(f, "{}", s)
    }
}

/// Channel interleaving of the image data.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub enum Interleaving {
    #[default]
    Unknown = 0,
    Pixel = 1,
    Line = 2,
    Band = 3,
}

impl Interleaving {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_known(self) -> bool {
        self != Interleaving::Unknown
    }
}

impl std::fmt::Display for Interleaving {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interleaving::Unknown => write!(f, "Unknown"),
            Interleaving::Pixel => write!(f, "BIP"),
            Interleaving::Line => write!(f, "BIL"),
            Interleaving::Band => write!(f, "BSQ"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_ceos_numbering() {
        assert_eq!(DataType::Unknown.code(), 0);
        assert_eq!(DataType::UChar.code(), 2);
        assert_eq!(DataType::UShort.code(), 4);
        assert_eq!(DataType::ComplexFloat.code(), 15);
        assert_eq!(DataType::CompressedCrossProduct.code(), 17);
        assert_eq!(DataType::PalsarComplexShort.code(), 18);
        assert_eq!(Interleaving::Line.code(), 2);
        assert_eq!(Interleaving::Band.code(), 3);
    }
}
