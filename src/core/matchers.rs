//! Product-specific wrappers around the table interpreter.
use serde::Serialize;
use tracing::debug;

use crate::core::descriptor::ImageDescriptor;
use crate::core::fields::{extract_string, starts_with_ci};
use crate::core::interpreter;
use crate::core::recipes::{IMAGE_OPT, RecipeEntry};
use crate::io::record::{FileClass, RecordStore};
use crate::types::DataType;

/// "SAR data format type" field of the imagery options record.
const SAR_DATA_FORMAT_OFFSET: usize = 401;
const SAR_DATA_FORMAT_LEN: usize = 28;
/// Product identifier field of the imagery options record.
const PRODUCT_ID_OFFSET: usize = 49;
const PRODUCT_ID_LEN: usize = 16;

const SIRC_FORMAT: &str = "COMPRESSED CROSS-PRODUCTS";
const PALSAR_FORMAT: &str = "INTEGER*18                 ";
const PALSAR_PRODUCT_PREFIX: &str = "ALOS-";

const SIRC_BYTES_PER_PIXEL: i64 = 10;
const PALSAR_BYTES_PER_PIXEL: i64 = 18;
const PALSAR_CHANNELS: i64 = 6;

/// How a recipe's table is applied.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub enum Matcher {
    Default,
    /// Stored line count covers one of two interleaved passes.
    ScanSar,
    /// SIR-C compressed cross-product data.
    Sirc,
    /// ALOS PALSAR polarimetric 18-byte data.
    Palsar,
}

impl Matcher {
    pub fn attempt(
        self,
        store: &dyn RecordStore,
        table: &[RecipeEntry],
        desc: &mut ImageDescriptor,
    ) -> bool {
        match self {
            Matcher::Default => interpreter::attempt(store, table, desc),
            Matcher::ScanSar => scansar(store, table, desc),
            Matcher::Sirc => sirc(store, table, desc),
            Matcher::Palsar => palsar(store, table, desc),
        }
    }
}

fn scansar(store: &dyn RecordStore, table: &[RecipeEntry], desc: &mut ImageDescriptor) -> bool {
    if !interpreter::attempt(store, table, desc) {
        return false;
    }
    desc.lines *= 2;
    true
}

fn sirc(store: &dyn RecordStore, table: &[RecipeEntry], desc: &mut ImageDescriptor) -> bool {
    let Some(record) = store.find_record(IMAGE_OPT, FileClass::ImageryOptions) else {
        return false;
    };
    let format = extract_string(record, SAR_DATA_FORMAT_OFFSET, SAR_DATA_FORMAT_LEN);
    if !starts_with_ci(&format, SIRC_FORMAT) {
        return false;
    }

    interpreter::attempt(store, table, desc);
    if desc.bytes_per_pixel != SIRC_BYTES_PER_PIXEL {
        debug!(
            "SIR-C format marker present but {} bytes per pixel",
            desc.bytes_per_pixel
        );
        desc.valid = false;
        return false;
    }

    // Stored pixel data byte count is wrong in these products.
    desc.pixel_data_bytes_per_record = desc.bytes_per_pixel * desc.pixels_per_line;
    desc.data_type = DataType::CompressedCrossProduct;

    desc.validate()
}

fn palsar(store: &dyn RecordStore, table: &[RecipeEntry], desc: &mut ImageDescriptor) -> bool {
    let Some(record) = store.find_record(IMAGE_OPT, FileClass::ImageryOptions) else {
        return false;
    };
    let format = extract_string(record, SAR_DATA_FORMAT_OFFSET, SAR_DATA_FORMAT_LEN);
    if !starts_with_ci(&format, PALSAR_FORMAT) {
        return false;
    }
    let product = extract_string(record, PRODUCT_ID_OFFSET, PRODUCT_ID_LEN);
    if !starts_with_ci(&product, PALSAR_PRODUCT_PREFIX) {
        return false;
    }

    interpreter::attempt(store, table, desc);
    if desc.bytes_per_pixel != PALSAR_BYTES_PER_PIXEL {
        debug!(
            "PALSAR markers present but {} bytes per pixel",
            desc.bytes_per_pixel
        );
        desc.valid = false;
        return false;
    }

    desc.data_type = DataType::PalsarComplexShort;
    desc.channels = PALSAR_CHANNELS;

    desc.validate()
}
