use serde::{Deserialize, Serialize};

use crate::types::{DataType, Interleaving};

/// Resolved layout of the image data in a CEOS imagery file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub channels: i64,
    pub interleaving: Interleaving,
    pub data_type: DataType,
    pub bytes_per_record: i64,
    pub lines: i64,
    pub pixels_per_line: i64,
    pub pixels_per_record: i64,
    pub top_border_pixels: i64,
    pub bottom_border_pixels: i64,
    pub left_border_pixels: i64,
    pub right_border_pixels: i64,
    pub bytes_per_pixel: i64,
    pub records_per_line: i64,
    pub pixel_data_bytes_per_record: i64,
    /// Offset from the start of a data record to its first pixel byte.
    pub image_data_start: i64,
    pub suffix_bytes: i64,
    /// Length of the imagery options (file descriptor) record.
    pub header_length: i64,
    pub valid: bool,
}

impl ImageDescriptor {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Names of the mandatory fields that are still zero or unknown.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("pixels_per_line", self.pixels_per_line != 0),
            ("lines", self.lines != 0),
            ("records_per_line", self.records_per_line != 0),
            ("image_data_start", self.image_data_start != 0),
            ("header_length", self.header_length != 0),
            ("data_type", self.data_type.is_known()),
            ("channels", self.channels != 0),
            ("bytes_per_pixel", self.bytes_per_pixel != 0),
            ("interleaving", self.interleaving.is_known()),
            ("bytes_per_record", self.bytes_per_record != 0),
        ];
        checks
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| name)
            .collect()
    }

    /// Validation gate: every mandatory field must be set. Updates `valid`.
    pub fn validate(&mut self) -> bool {
        self.valid = self.missing_fields().is_empty();
        self.valid
    }
}
