//! Built-in recipe tables.
//!
//! Each table lists, per descriptor field, which record holds it and where.
//! Offsets are 1-based positions inside the record, prefix included. These
//! positions must stay byte-for-byte as they are: they are what real
//! producer files contain.
use serde::Serialize;

use crate::core::descriptor::ImageDescriptor;
use crate::core::fields::Encoding;
use crate::io::record::{FileClass, RecordSignature};

/// Imagery options file descriptor record.
pub const IMAGE_OPT: RecordSignature = RecordSignature::new(63, 192, 18, 18);
/// File descriptor variant written by some JERS products.
pub const IMAGE_JERS_OPT: RecordSignature = RecordSignature::new(50, 192, 18, 18);
pub const PROC_DATA_REC: RecordSignature = RecordSignature::new(50, 11, 18, 20);
/// Alternate processed data record subtype seen on ERS-1.
pub const PROC_DATA_REC_ALT: RecordSignature = RecordSignature::new(50, 11, 31, 20);
/// Second alternate processed data record subtype (ERS-1, ERS-2).
pub const PROC_DATA_REC_ALT2: RecordSignature = RecordSignature::new(50, 11, 31, 50);
pub const DATA_SET_SUMMARY: RecordSignature = RecordSignature::new(18, 10, 18, 20);
/// Generic imagery data record, used to cross-check derived record sizes.
pub const IMAGERY_RECORD: RecordSignature = RecordSignature::new(0xed, 0xed, 0x12, 0x12);

/// Descriptor field a recipe entry feeds.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub enum DescriptorField {
    Channels,
    Interleaving,
    DataType,
    BytesPerRecord,
    Lines,
    TopBorderPixels,
    BottomBorderPixels,
    LeftBorderPixels,
    RightBorderPixels,
    BytesPerPixel,
    RecordsPerLine,
    PixelsPerLine,
    PixelsPerRecord,
    PixelDataBytesPerRecord,
    ImageDataStart,
    HeaderLength,
    PixelOrder,
    LineOrder,
    ProductType,
    RecordSize,
    SuffixSize,
}

/// How an extracted value lands in the descriptor.
pub enum FieldSlot {
    Integer(fn(&mut ImageDescriptor, i64)),
    /// Prefix byte count, stored as an offset from the record start.
    ImageDataStart,
    Interleaving,
    DataType,
    /// Listed in tables but only ever computed.
    Reserved,
}

impl DescriptorField {
    pub fn slot(self) -> FieldSlot {
        use DescriptorField::*;
        match self {
            Channels => FieldSlot::Integer(|d, v| d.channels = v),
            Lines => FieldSlot::Integer(|d, v| d.lines = v),
            BytesPerPixel => FieldSlot::Integer(|d, v| d.bytes_per_pixel = v),
            RecordsPerLine => FieldSlot::Integer(|d, v| d.records_per_line = v),
            PixelDataBytesPerRecord => FieldSlot::Integer(|d, v| d.pixel_data_bytes_per_record = v),
            HeaderLength => FieldSlot::Integer(|d, v| d.header_length = v),
            SuffixSize => FieldSlot::Integer(|d, v| d.suffix_bytes = v),
            RecordSize => FieldSlot::Integer(|d, v| d.bytes_per_record = v),
            PixelsPerLine => FieldSlot::Integer(|d, v| d.pixels_per_line = v),
            TopBorderPixels => FieldSlot::Integer(|d, v| d.top_border_pixels = v),
            BottomBorderPixels => FieldSlot::Integer(|d, v| d.bottom_border_pixels = v),
            LeftBorderPixels => FieldSlot::Integer(|d, v| d.left_border_pixels = v),
            RightBorderPixels => FieldSlot::Integer(|d, v| d.right_border_pixels = v),
            ImageDataStart => FieldSlot::ImageDataStart,
            Interleaving => FieldSlot::Interleaving,
            DataType => FieldSlot::DataType,
            BytesPerRecord | PixelsPerRecord | PixelOrder | LineOrder | ProductType => {
                FieldSlot::Reserved
            }
        }
    }
}

/// One extraction instruction.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct RecipeEntry {
    pub field: DescriptorField,
    /// `false` for entries kept only as placeholders for computed values.
    pub extract: bool,
    pub file_class: FileClass,
    pub signature: RecordSignature,
    pub offset: usize,
    pub length: usize,
    pub encoding: Encoding,
}

pub type RecipeTable = &'static [RecipeEntry];

const fn entry(
    field: DescriptorField,
    extract: bool,
    file_class: FileClass,
    signature: RecordSignature,
    offset: usize,
    length: usize,
    encoding: Encoding,
) -> RecipeEntry {
    RecipeEntry {
        field,
        extract,
        file_class,
        signature,
        offset,
        length,
        encoding,
    }
}

use DescriptorField as F;
use Encoding::{Alphanumeric as A, AsciiInteger as I, Binary as B};
use FileClass::{Any, ImageryOptions as IMG};

/// Generic layout shared by most products (RadarSat, and PALSAR after its
/// signature checks).
pub static RADARSAT_RECIPE: &[RecipeEntry] = &[
    entry(F::Channels, true, IMG, IMAGE_OPT, 233, 4, I),
    entry(F::Interleaving, true, IMG, IMAGE_OPT, 269, 4, A),
    entry(F::DataType, true, IMG, IMAGE_OPT, 429, 4, A),
    entry(F::BytesPerRecord, false, IMG, IMAGE_OPT, 0, 0, A),
    entry(F::Lines, true, IMG, IMAGE_OPT, 237, 8, I),
    entry(F::TopBorderPixels, false, IMG, IMAGE_OPT, 261, 4, I),
    entry(F::BottomBorderPixels, false, IMG, IMAGE_OPT, 265, 4, I),
    entry(F::PixelsPerLine, true, IMG, IMAGE_OPT, 249, 8, I),
    entry(F::LeftBorderPixels, true, IMG, IMAGE_OPT, 245, 4, I),
    entry(F::RightBorderPixels, true, IMG, IMAGE_OPT, 257, 4, I),
    entry(F::BytesPerPixel, true, IMG, IMAGE_OPT, 225, 4, I),
    entry(F::RecordsPerLine, true, IMG, IMAGE_OPT, 273, 2, I),
    entry(F::PixelsPerRecord, false, IMG, IMAGE_OPT, 0, 0, I),
    entry(F::PixelDataBytesPerRecord, true, IMG, IMAGE_OPT, 281, 8, I),
    entry(F::ImageDataStart, true, IMG, IMAGE_OPT, 277, 4, I),
    entry(F::HeaderLength, true, IMG, IMAGE_OPT, 9, 4, B),
    entry(F::PixelOrder, false, IMG, IMAGE_OPT, 0, 0, I),
    entry(F::LineOrder, false, IMG, IMAGE_OPT, 0, 0, I),
    entry(F::ProductType, false, IMG, IMAGE_OPT, 0, 0, I),
    entry(F::RecordSize, true, IMG, PROC_DATA_REC, 9, 4, B),
    entry(F::RecordSize, true, IMG, PROC_DATA_REC_ALT, 9, 4, B),
    entry(F::RecordSize, true, IMG, PROC_DATA_REC_ALT2, 9, 4, B),
    entry(F::SuffixSize, true, IMG, IMAGE_OPT, 289, 4, I),
];

pub static JERS_RECIPE: &[RecipeEntry] = &[
    entry(F::Channels, true, IMG, IMAGE_JERS_OPT, 233, 4, I),
    entry(F::Interleaving, true, IMG, IMAGE_JERS_OPT, 269, 4, A),
    entry(F::DataType, true, IMG, IMAGE_JERS_OPT, 429, 4, A),
    entry(F::BytesPerRecord, false, IMG, IMAGE_JERS_OPT, 0, 0, A),
    entry(F::Lines, true, IMG, IMAGE_JERS_OPT, 237, 8, I),
    entry(F::TopBorderPixels, false, IMG, IMAGE_JERS_OPT, 261, 4, I),
    entry(F::BottomBorderPixels, false, IMG, IMAGE_JERS_OPT, 265, 4, I),
    entry(F::PixelsPerLine, true, IMG, IMAGE_JERS_OPT, 249, 8, I),
    entry(F::LeftBorderPixels, false, IMG, IMAGE_JERS_OPT, 245, 4, I),
    entry(F::RightBorderPixels, false, IMG, IMAGE_JERS_OPT, 257, 4, I),
    entry(F::BytesPerPixel, true, IMG, IMAGE_JERS_OPT, 225, 4, I),
    entry(F::RecordsPerLine, true, IMG, IMAGE_JERS_OPT, 273, 2, I),
    entry(F::PixelsPerRecord, false, IMG, IMAGE_JERS_OPT, 0, 0, I),
    entry(F::PixelDataBytesPerRecord, true, IMG, IMAGE_JERS_OPT, 281, 8, I),
    entry(F::ImageDataStart, true, IMG, IMAGE_JERS_OPT, 277, 4, I),
    entry(F::HeaderLength, true, IMG, IMAGE_JERS_OPT, 9, 4, B),
    entry(F::PixelOrder, false, IMG, IMAGE_JERS_OPT, 0, 0, I),
    entry(F::LineOrder, false, IMG, IMAGE_JERS_OPT, 0, 0, I),
    entry(F::ProductType, false, IMG, IMAGE_JERS_OPT, 0, 0, I),
    entry(F::RecordSize, true, IMG, PROC_DATA_REC, 9, 4, B),
    entry(F::SuffixSize, true, IMG, IMAGE_JERS_OPT, 289, 4, I),
];

/// Line count comes from the data set summary in the leader file.
pub static SCANSAR_RECIPE: &[RecipeEntry] = &[
    entry(F::Channels, true, IMG, IMAGE_OPT, 233, 4, I),
    entry(F::Interleaving, true, IMG, IMAGE_OPT, 269, 4, A),
    entry(F::DataType, true, IMG, IMAGE_OPT, 429, 4, A),
    entry(F::Lines, true, Any, DATA_SET_SUMMARY, 325, 8, I),
    entry(F::PixelsPerLine, true, IMG, IMAGE_OPT, 249, 8, I),
    entry(F::BytesPerPixel, true, IMG, IMAGE_OPT, 225, 4, I),
    entry(F::RecordsPerLine, true, IMG, IMAGE_OPT, 273, 2, I),
    entry(F::ImageDataStart, true, IMG, IMAGE_OPT, 277, 4, I),
    entry(F::HeaderLength, true, IMG, IMAGE_OPT, 9, 4, B),
    entry(F::RecordSize, true, IMG, PROC_DATA_REC, 9, 4, B),
    entry(F::SuffixSize, true, IMG, IMAGE_OPT, 289, 4, I),
];

pub static SIRC_RECIPE: &[RecipeEntry] = &[
    entry(F::Channels, true, IMG, IMAGE_OPT, 233, 4, I),
    entry(F::Interleaving, true, IMG, IMAGE_OPT, 269, 4, A),
    entry(F::DataType, true, IMG, IMAGE_OPT, 429, 4, A),
    entry(F::Lines, true, IMG, IMAGE_OPT, 237, 8, I),
    entry(F::TopBorderPixels, false, IMG, IMAGE_OPT, 261, 4, I),
    entry(F::BottomBorderPixels, false, IMG, IMAGE_OPT, 265, 4, I),
    entry(F::PixelsPerLine, true, IMG, IMAGE_OPT, 249, 8, I),
    entry(F::LeftBorderPixels, false, IMG, IMAGE_OPT, 245, 4, I),
    entry(F::RightBorderPixels, false, IMG, IMAGE_OPT, 257, 4, I),
    entry(F::BytesPerPixel, true, IMG, IMAGE_OPT, 225, 4, I),
    entry(F::RecordsPerLine, true, IMG, IMAGE_OPT, 273, 2, I),
    entry(F::ImageDataStart, true, IMG, IMAGE_OPT, 277, 4, I),
    entry(F::HeaderLength, true, IMG, IMAGE_OPT, 9, 4, B),
    entry(F::RecordSize, true, IMG, PROC_DATA_REC, 9, 4, B),
    entry(F::SuffixSize, true, IMG, IMAGE_OPT, 289, 4, I),
];
