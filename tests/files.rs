mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::*;
use sarceos::core::recipes::IMAGERY_RECORD;
use sarceos::io::writers::report::write_report_sidecar;
use sarceos::{
    CeosRecord, Error, FileClass, ResolveParams, resolve_directory, resolve_product,
    resolve_product_dir,
};

fn write_records(path: &Path, records: &[CeosRecord]) {
    let bytes: Vec<u8> = records.iter().flat_map(|r| r.bytes().to_vec()).collect();
    fs::write(path, bytes).unwrap();
}

/// Writes a leader and an imagery file for a standard product.
fn write_product(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    write_records(&dir.join("LEA_01.001"), &[data_set_summary(1000)]);

    let mut imagery = vec![OptionsFields::default().record()];
    imagery.extend((0..4).map(|_| processed_data_record(2192)));
    write_records(&dir.join("DAT_01.001"), &imagery);
}

#[test]
fn resolves_product_from_files() {
    let dir = tempfile::tempdir().unwrap();
    write_product(dir.path());

    let files: Vec<(PathBuf, FileClass)> = vec![
        (dir.path().join("LEA_01.001"), FileClass::Leader),
        (dir.path().join("DAT_01.001"), FileClass::ImageryOptions),
    ];
    let product = resolve_product("scene", &files, &ResolveParams::default()).unwrap();

    assert!(product.is_resolved());
    assert_eq!(product.recipe, Some("RadarSat"));
    assert_eq!(product.descriptor.pixels_per_line, 2000);
    assert_eq!(product.descriptor.bytes_per_record, 2192);
    // One leader record plus the default two imagery records.
    assert_eq!(product.record_count, 3);
}

#[test]
fn imagery_limit_none_reads_every_record() {
    let dir = tempfile::tempdir().unwrap();
    write_product(dir.path());

    let params = ResolveParams {
        imagery_record_limit: None,
        ..ResolveParams::default()
    };
    let product = resolve_product_dir(dir.path(), &params).unwrap();
    assert_eq!(product.record_count, 6);
}

#[test]
fn derived_record_size_checked_against_file() {
    let dir = tempfile::tempdir().unwrap();
    let fields = OptionsFields {
        suffix_bytes: 8,
        ..OptionsFields::default()
    };
    write_records(
        &dir.path().join("scene.dat"),
        &[fields.record(), data_record(IMAGERY_RECORD, 2200)],
    );

    let product = resolve_product_dir(dir.path(), &ResolveParams::default()).unwrap();
    assert_eq!(product.recipe, Some("RadarSat"));
    assert_eq!(product.descriptor.bytes_per_record, 2200);
}

#[test]
fn product_without_imagery_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_records(&dir.path().join("LEA_01.001"), &[data_set_summary(1000)]);

    let err = resolve_product_dir(dir.path(), &ResolveParams::default()).unwrap_err();
    assert!(matches!(err, Error::MissingImagery(_)));
}

#[test]
fn truncated_imagery_file_is_a_container_error() {
    let dir = tempfile::tempdir().unwrap();
    let record = OptionsFields::default().record();
    fs::write(dir.path().join("DAT_01.001"), &record.bytes()[..100]).unwrap();

    let err = resolve_product_dir(dir.path(), &ResolveParams::default()).unwrap_err();
    assert!(matches!(err, Error::Container(_)));
}

#[test]
fn zero_imagery_limit_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_product(dir.path());

    let params = ResolveParams {
        imagery_record_limit: Some(0),
        ..ResolveParams::default()
    };
    let err = resolve_product_dir(dir.path(), &params).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn batch_counts_resolved_unmatched_and_errors() {
    let root = tempfile::tempdir().unwrap();
    write_product(&root.path().join("a_good"));

    let unmatched = root.path().join("b_unmatched");
    fs::create_dir_all(&unmatched).unwrap();
    let fields = OptionsFields {
        data_type: "    ",
        bytes_per_pixel: 3,
        ..OptionsFields::default()
    };
    write_records(
        &unmatched.join("DAT_01.001"),
        &[fields.record(), processed_data_record(6192)],
    );

    fs::create_dir_all(root.path().join("c_empty")).unwrap();

    let report = resolve_directory(root.path(), &ResolveParams::default(), true).unwrap();
    assert_eq!(report.resolved, 1);
    assert_eq!(report.unmatched, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.products.len(), 2);
    assert_eq!(report.products[0].name, "a_good");

    let err = resolve_directory(root.path(), &ResolveParams::default(), false).unwrap_err();
    assert!(matches!(err, Error::MissingImagery(name) if name == "c_empty"));
}

#[test]
fn report_sidecar_round_trips_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    write_product(&dir.path().join("scene"));
    let product = resolve_product_dir(&dir.path().join("scene"), &ResolveParams::default()).unwrap();

    let path = write_report_sidecar(dir.path(), &product).unwrap();
    assert_eq!(path.file_name().unwrap(), "scene.json");
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["recipe"], "RadarSat");
    assert_eq!(value["descriptor"]["lines"], 1000);
    assert_eq!(value["descriptor"]["valid"], true);
}
