#![allow(dead_code)]

use sarceos::core::recipes::{DATA_SET_SUMMARY, IMAGE_JERS_OPT, IMAGE_OPT, PROC_DATA_REC};
use sarceos::{CeosRecord, CeosVolume, FileClass, RecordSignature};

pub const HEADER_LENGTH: usize = 720;

/// Builds a record byte by byte: 12-byte prefix, then spaces.
pub struct RecordBuilder {
    sequence: u32,
    signature: RecordSignature,
    class: FileClass,
    bytes: Vec<u8>,
}

impl RecordBuilder {
    pub fn new(signature: RecordSignature, class: FileClass, length: usize) -> Self {
        let mut bytes = vec![b' '; length];
        bytes[0..4].copy_from_slice(&1u32.to_be_bytes());
        bytes[4..8].copy_from_slice(&signature.to_bytes());
        bytes[8..12].copy_from_slice(&(length as u32).to_be_bytes());
        Self {
            sequence: 1,
            signature,
            class,
            bytes,
        }
    }

    pub fn sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self.bytes[0..4].copy_from_slice(&sequence.to_be_bytes());
        self
    }

    /// Write `text` at a 1-based offset.
    pub fn text(mut self, offset: usize, text: &str) -> Self {
        let start = offset - 1;
        self.bytes[start..start + text.len()].copy_from_slice(text.as_bytes());
        self
    }

    /// Write a right-aligned decimal number into a `width`-byte field.
    pub fn int(self, offset: usize, width: usize, value: i64) -> Self {
        let text = format!("{:>width$}", value, width = width);
        self.text(offset, &text)
    }

    pub fn build(self) -> CeosRecord {
        CeosRecord::new(self.sequence, self.signature, self.class, self.bytes)
    }
}

/// Values written into an imagery options record.
#[derive(Clone)]
pub struct OptionsFields {
    pub signature: RecordSignature,
    pub bytes_per_pixel: i64,
    pub channels: i64,
    pub lines: i64,
    pub left_border: i64,
    pub pixels_per_line: Option<i64>,
    pub right_border: i64,
    pub interleaving: &'static str,
    pub records_per_line: i64,
    pub prefix_bytes: i64,
    pub pixel_data_bytes: i64,
    pub suffix_bytes: i64,
    pub data_type: &'static str,
    pub product_id: &'static str,
    pub sar_data_format: &'static str,
}

impl Default for OptionsFields {
    fn default() -> Self {
        Self {
            signature: IMAGE_OPT,
            bytes_per_pixel: 1,
            channels: 1,
            lines: 1000,
            left_border: 4,
            pixels_per_line: Some(2000),
            right_border: 6,
            interleaving: "BSQ ",
            records_per_line: 1,
            prefix_bytes: 180,
            pixel_data_bytes: 2000,
            suffix_bytes: 0,
            data_type: "IU1 ",
            product_id: "",
            sar_data_format: "",
        }
    }
}

impl OptionsFields {
    pub fn jers() -> Self {
        Self {
            signature: IMAGE_JERS_OPT,
            ..Self::default()
        }
    }

    pub fn record(&self) -> CeosRecord {
        let mut b = RecordBuilder::new(self.signature, FileClass::ImageryOptions, HEADER_LENGTH)
            .text(49, self.product_id)
            .int(225, 4, self.bytes_per_pixel)
            .int(233, 4, self.channels)
            .int(237, 8, self.lines)
            .int(245, 4, self.left_border)
            .int(257, 4, self.right_border)
            .text(269, self.interleaving)
            .int(273, 2, self.records_per_line)
            .int(277, 4, self.prefix_bytes)
            .int(281, 8, self.pixel_data_bytes)
            .int(289, 4, self.suffix_bytes)
            .text(401, self.sar_data_format)
            .text(429, self.data_type);
        if let Some(ppl) = self.pixels_per_line {
            b = b.int(249, 8, ppl);
        }
        b.build()
    }
}

pub fn data_record(signature: RecordSignature, length: usize) -> CeosRecord {
    RecordBuilder::new(signature, FileClass::ImageryOptions, length)
        .sequence(2)
        .build()
}

pub fn processed_data_record(length: usize) -> CeosRecord {
    data_record(PROC_DATA_REC, length)
}

pub fn data_set_summary(lines: i64) -> CeosRecord {
    RecordBuilder::new(DATA_SET_SUMMARY, FileClass::Leader, 4096)
        .int(325, 8, lines)
        .build()
}

/// A standard single-channel product: 2000 x 1000 bytes, 192-byte prefix.
pub fn generic_volume() -> CeosVolume {
    let fields = OptionsFields::default();
    CeosVolume::from_records(vec![fields.record(), processed_data_record(2192)])
}

pub fn volume_with(fields: &OptionsFields, data_len: usize) -> CeosVolume {
    CeosVolume::from_records(vec![fields.record(), processed_data_record(data_len)])
}
