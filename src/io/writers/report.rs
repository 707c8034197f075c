use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::api::ResolvedProduct;

/// Flatten a resolved product into upper-case keyed fields.
pub fn extract_descriptor_fields(product: &ResolvedProduct) -> BTreeMap<String, String> {
    let d = &product.descriptor;
    let mut fields = BTreeMap::new();

    fields.insert("PRODUCT".to_string(), product.name.clone());
    fields.insert(
        "RECIPE".to_string(),
        product.recipe.unwrap_or("none").to_string(),
    );
    fields.insert("VALID".to_string(), d.valid.to_string());
    fields.insert("RECORDS".to_string(), product.record_count.to_string());

    if !d.valid {
        return fields;
    }

    // Image geometry
    fields.insert("LINES".to_string(), d.lines.to_string());
    fields.insert("PIXELS_PER_LINE".to_string(), d.pixels_per_line.to_string());
    fields.insert("CHANNELS".to_string(), d.channels.to_string());
    fields.insert("INTERLEAVING".to_string(), d.interleaving.to_string());
    fields.insert("DATA_TYPE".to_string(), d.data_type.to_string());
    fields.insert("BYTES_PER_PIXEL".to_string(), d.bytes_per_pixel.to_string());

    // Record layout
    fields.insert("BYTES_PER_RECORD".to_string(), d.bytes_per_record.to_string());
    fields.insert("RECORDS_PER_LINE".to_string(), d.records_per_line.to_string());
    fields.insert("PIXELS_PER_RECORD".to_string(), d.pixels_per_record.to_string());
    fields.insert(
        "PIXEL_DATA_BYTES_PER_RECORD".to_string(),
        d.pixel_data_bytes_per_record.to_string(),
    );
    fields.insert("IMAGE_DATA_START".to_string(), d.image_data_start.to_string());
    fields.insert("SUFFIX_BYTES".to_string(), d.suffix_bytes.to_string());
    fields.insert("HEADER_LENGTH".to_string(), d.header_length.to_string());

    // Borders are only reported when a recipe recorded them
    for (key, value) in [
        ("TOP_BORDER_PIXELS", d.top_border_pixels),
        ("BOTTOM_BORDER_PIXELS", d.bottom_border_pixels),
        ("LEFT_BORDER_PIXELS", d.left_border_pixels),
        ("RIGHT_BORDER_PIXELS", d.right_border_pixels),
    ] {
        if value != 0 {
            fields.insert(key.to_string(), value.to_string());
        }
    }

    fields
}

/// Render fields as aligned `KEY = value` lines.
pub fn render_text(product: &ResolvedProduct) -> String {
    let fields = extract_descriptor_fields(product);
    let width = fields.keys().map(|k| k.len()).max().unwrap_or(0);
    fields
        .iter()
        .map(|(k, v)| format!("{:<width$} = {}\n", k, v, width = width))
        .collect()
}

pub fn render_json(product: &ResolvedProduct) -> serde_json::Result<Value> {
    serde_json::to_value(product)
}

/// Write `<product>.json` into `output_dir` and return its path.
pub fn write_report_sidecar(
    output_dir: &Path,
    product: &ResolvedProduct,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = output_dir.join(format!("{}.json", product.name));
    let json_string = serde_json::to_string_pretty(&render_json(product)?)?;
    std::fs::write(&path, json_string)?;
    info!("Created descriptor report: {:?}", path);
    Ok(path)
}
