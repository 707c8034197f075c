//! High-level, ergonomic library API: resolve a CEOS product from its files
//! or its directory, and batch helpers over a directory of products. Prefer
//! these entrypoints over the low-level `core` modules when integrating
//! SARCEOS.
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::core::catalog::RecipeCatalog;
use crate::core::descriptor::ImageDescriptor;
use crate::core::params::ResolveParams;
use crate::error::{Error, Result};
use crate::io::layout::product_files;
use crate::io::record::{CeosVolume, FileClass};

/// Result of resolving one product
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedProduct {
    pub name: String,
    /// Recipe that produced the descriptor; None when nothing matched
    pub recipe: Option<&'static str>,
    pub descriptor: ImageDescriptor,
    pub record_count: usize,
    pub resolved_at: String,
}

impl ResolvedProduct {
    pub fn is_resolved(&self) -> bool {
        self.recipe.is_some()
    }
}

/// Resolve `volume` in place with the catalog selected by `params`.
pub fn resolve_volume(volume: &mut CeosVolume, params: &ResolveParams) -> Result<bool> {
    match &params.recipe {
        Some(name) => {
            let recipe = RecipeCatalog::builtin()
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownRecipe(name.clone()))?;
            let catalog = RecipeCatalog::builder().recipe(recipe).build();
            Ok(volume.resolve_image_desc(&catalog))
        }
        None => Ok(volume.resolve_image_desc(RecipeCatalog::builtin())),
    }
}

/// Frame the given files and resolve the product's image descriptor.
pub fn resolve_product(
    name: &str,
    files: &[(PathBuf, FileClass)],
    params: &ResolveParams,
) -> Result<ResolvedProduct> {
    params.validate()?;
    if !files.iter().any(|(_, c)| *c == FileClass::ImageryOptions) {
        return Err(Error::MissingImagery(name.to_string()));
    }

    let mut volume = CeosVolume::open(files, params.imagery_record_limit)?;
    if resolve_volume(&mut volume, params)? {
        info!(
            "{}: resolved with recipe '{}'",
            name,
            volume.recipe.unwrap_or_default()
        );
    } else {
        warn!("{}: no recipe matched", name);
    }

    Ok(ResolvedProduct {
        name: name.to_string(),
        recipe: volume.recipe,
        descriptor: volume.image_desc.clone(),
        record_count: volume.records().len(),
        resolved_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Resolve a product directory, classifying its files by name.
pub fn resolve_product_dir(dir: &Path, params: &ResolveParams) -> Result<ResolvedProduct> {
    let files = product_files(dir)?;
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    resolve_product(&name, &files, params)
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct BatchReport {
    pub resolved: usize,
    pub unmatched: usize,
    pub errors: usize,
    pub products: Vec<ResolvedProduct>,
}

/// Return the immediate subdirectories of `input_dir` (candidate products), sorted.
pub fn iterate_products(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Resolve every product directory under `input_dir`.
/// If `continue_on_error` is true, errors are counted in the report and
/// processing continues; otherwise, the first error is returned.
pub fn resolve_directory(
    input_dir: &Path,
    params: &ResolveParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for path in iterate_products(input_dir)? {
        match resolve_product_dir(&path, params) {
            Ok(product) => {
                if product.is_resolved() {
                    report.resolved += 1;
                } else {
                    report.unmatched += 1;
                }
                report.products.push(product);
            }
            Err(e) => {
                warn!("Error resolving {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}
