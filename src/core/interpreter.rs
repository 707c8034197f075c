//! Table-driven population of an [`ImageDescriptor`].
//!
//! [`attempt`] runs one recipe table against a record store: it extracts every
//! active entry, fills in what the product left out from the values it did
//! record, and finally applies the validation gate. A `false` result only
//! means the recipe does not describe this product.
use tracing::debug;

use crate::core::descriptor::ImageDescriptor;
use crate::core::fields::{extract_integer, extract_string};
use crate::core::recipes::{FieldSlot, IMAGERY_RECORD, RecipeEntry};
use crate::core::tokens::{DATA_TYPE_TOKENS, INTERLEAVING_TOKENS, lookup};
use crate::io::record::{FileClass, Record, RecordStore};
use crate::types::DataType;

/// Length of the record start (sequence, signature, length) that the stored
/// prefix size does not account for.
const RECORD_START_LEN: i64 = 12;

/// Some producers store 180 + 12 already; take 192 as-is.
const PREFIX_ALREADY_OFFSET: i64 = 192;

pub fn attempt(store: &dyn RecordStore, table: &[RecipeEntry], desc: &mut ImageDescriptor) -> bool {
    desc.reset();

    for entry in table.iter().filter(|e| e.extract) {
        // A missing record leaves the field at zero.
        if let Some(record) = store.find_record(entry.signature, entry.file_class) {
            apply_entry(record, entry, desc);
        }
    }

    if !derive_missing(store, desc) {
        return false;
    }

    desc.validate()
}

fn apply_entry(record: &dyn Record, entry: &RecipeEntry, desc: &mut ImageDescriptor) {
    let integer = || match extract_integer(record, entry.encoding, entry.offset, entry.length) {
        Ok(value) => value,
        Err(e) => {
            debug!("{:?} not read from {}: {}", entry.field, entry.signature, e);
            0
        }
    };

    match entry.field.slot() {
        FieldSlot::Integer(set) => set(desc, integer()),
        FieldSlot::ImageDataStart => {
            let raw = integer();
            desc.image_data_start = if raw == PREFIX_ALREADY_OFFSET {
                raw
            } else {
                raw + RECORD_START_LEN
            };
        }
        FieldSlot::Interleaving => {
            let text = extract_string(record, entry.offset, entry.length);
            desc.interleaving = lookup(INTERLEAVING_TOKENS, &text);
        }
        FieldSlot::DataType => {
            let text = extract_string(record, entry.offset, entry.length);
            desc.data_type = lookup(DATA_TYPE_TOKENS, &text);
        }
        FieldSlot::Reserved => {}
    }
}

/// Fill fields the product did not record. Returns `false` when a derived
/// record size contradicts the imagery file.
fn derive_missing(store: &dyn RecordStore, desc: &mut ImageDescriptor) -> bool {
    // Some products (Telaviv) omit the pixel count per line.
    if desc.pixels_per_line == 0
        && desc.pixel_data_bytes_per_record != 0
        && desc.bytes_per_pixel != 0
    {
        desc.pixels_per_line = desc.pixel_data_bytes_per_record / desc.bytes_per_pixel;
        debug!("Guessing pixels per line to be {}", desc.pixels_per_line);
    }

    if desc.bytes_per_record == 0
        && desc.records_per_line == 1
        && desc.pixels_per_line > 0
        && desc.bytes_per_pixel > 0
    {
        desc.bytes_per_record = desc.pixels_per_line * desc.bytes_per_pixel
            + desc.image_data_start
            + desc.suffix_bytes;

        let Some(imagery) = store.find_record(IMAGERY_RECORD, FileClass::ImageryOptions) else {
            debug!("Unable to find imagery record to check record length");
            return false;
        };

        let actual = imagery.length() as i64;
        if actual != desc.bytes_per_record {
            debug!(
                "Guessed record length ({}) did not match actual imagery record length ({}), recipe fails",
                desc.bytes_per_record, actual
            );
            return false;
        }
    }

    if desc.pixels_per_record == 0 && desc.bytes_per_record != 0 && desc.bytes_per_pixel != 0 {
        desc.pixels_per_record = (desc.bytes_per_record
            - (desc.suffix_bytes + desc.image_data_start))
            / desc.bytes_per_pixel;
        desc.pixels_per_record = desc.pixels_per_record.min(desc.pixels_per_line);
    }

    if !desc.data_type.is_known() && desc.bytes_per_pixel != 0 && desc.channels != 0 {
        desc.data_type = match desc.bytes_per_pixel / desc.channels {
            1 => DataType::UChar,
            2 => DataType::UShort,
            _ => DataType::Unknown,
        };
        if desc.data_type.is_known() {
            debug!("Guessing data type to be {}", desc.data_type);
        }
    }

    true
}
