mod common;

use std::sync::{Arc, Mutex};

use common::*;
use sarceos::core::catalog::builtin_recipes;
use sarceos::diagnostics::{DiagnosticsLayer, TraceEntry};
use sarceos::{
    CeosVolume, Error, ImageDescriptor, ProductRecipe, RecipeCatalog, ResolveParams,
    resolve_volume,
};
use tracing_subscriber::layer::SubscriberExt;

fn by_name(name: &str) -> ProductRecipe {
    *RecipeCatalog::builtin().get(name).unwrap()
}

/// Generic product that also carries a data set summary, so both the
/// RadarSat and ScanSAR recipes produce a valid descriptor.
fn ambiguous_volume() -> CeosVolume {
    let mut volume = generic_volume();
    volume.push(data_set_summary(1000));
    volume
}

#[test]
fn first_registered_recipe_wins() {
    let volume = ambiguous_volume();

    let resolution = RecipeCatalog::builtin().resolve(&volume).unwrap();
    assert_eq!(resolution.recipe, "RadarSat");
    assert_eq!(resolution.descriptor.lines, 1000);

    let reordered = RecipeCatalog::builder()
        .recipe(by_name("ScanSAR"))
        .recipe(by_name("RadarSat"))
        .build();
    let resolution = reordered.resolve(&volume).unwrap();
    assert_eq!(resolution.recipe, "ScanSAR");
    assert_eq!(resolution.descriptor.lines, 2000);
}

#[test]
fn resolving_twice_gives_the_same_descriptor() {
    let mut volume = generic_volume();
    let catalog = RecipeCatalog::builtin();

    assert!(volume.resolve_image_desc(catalog));
    let first = volume.image_desc.clone();
    assert!(volume.resolve_image_desc(catalog));

    assert_eq!(volume.image_desc, first);
    assert_eq!(volume.recipe, Some("RadarSat"));
}

#[test]
fn jers_descriptor_record_resolves_with_jers_recipe() {
    let volume = volume_with(&OptionsFields::jers(), 2192);
    let resolution = RecipeCatalog::builtin().resolve(&volume).unwrap();

    assert_eq!(resolution.recipe, "Jers");
    assert_eq!(resolution.descriptor.pixels_per_line, 2000);
    // Borders are not part of the JERS table.
    assert_eq!(resolution.descriptor.left_border_pixels, 0);
}

#[test]
fn unmatched_product_leaves_descriptor_zeroed() {
    let fields = OptionsFields {
        interleaving: "BIP ",
        ..OptionsFields::default()
    };
    let mut volume = volume_with(&fields, 2192);
    volume.image_desc.lines = 5;
    volume.recipe = Some("stale");

    assert!(!volume.resolve_image_desc(RecipeCatalog::builtin()));
    assert_eq!(volume.image_desc, ImageDescriptor::default());
    assert_eq!(volume.recipe, None);
}

#[test]
fn empty_catalog_matches_nothing() {
    let catalog = RecipeCatalog::builder().build();
    assert!(catalog.resolve(&generic_volume()).is_none());
}

#[test]
fn builtin_recipes_match_catalog() {
    let names: Vec<_> = builtin_recipes().iter().map(|r| r.name).collect();
    let catalog: Vec<_> = RecipeCatalog::builtin()
        .recipes()
        .iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, catalog);
}

#[test]
fn matched_recipe_is_reported_to_diagnostics() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let layer = DiagnosticsLayer::new(move |e: &TraceEntry| {
        sink.lock().unwrap().push(e.message.clone())
    });
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        RecipeCatalog::builtin().resolve(&generic_volume());
    });

    let messages = seen.lock().unwrap();
    assert!(messages.iter().any(|m| m == "Using recipe 'RadarSat'"));
    assert!(messages.iter().any(|m| m == "Recipe 'SIR-C' does not apply"));
}

#[test]
fn forced_recipe_restricts_the_catalog() {
    let params = ResolveParams {
        recipe: Some("scansar".to_string()),
        ..ResolveParams::default()
    };

    let mut volume = ambiguous_volume();
    assert!(resolve_volume(&mut volume, &params).unwrap());
    assert_eq!(volume.recipe, Some("ScanSAR"));
    assert_eq!(volume.image_desc.lines, 2000);

    let mut plain = generic_volume();
    assert!(!resolve_volume(&mut plain, &params).unwrap());
}

#[test]
fn unknown_forced_recipe_is_an_error() {
    let params = ResolveParams {
        recipe: Some("Envisat".to_string()),
        ..ResolveParams::default()
    };
    let err = resolve_volume(&mut generic_volume(), &params).unwrap_err();
    assert!(matches!(err, Error::UnknownRecipe(name) if name == "Envisat"));
}
