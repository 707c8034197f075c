use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use sarceos::api::{ResolvedProduct, resolve_directory, resolve_product};
use sarceos::core::catalog::RecipeCatalog;
use sarceos::io::FileClass;
use sarceos::io::writers::report::{render_json, render_text, write_report_sidecar};
use sarceos::types::OutputFormat;
use sarceos::ResolveParams;

use super::args::CliArgs;
use super::errors::AppError;

fn build_params(args: &CliArgs) -> Result<ResolveParams, AppError> {
    let mut params = match &args.config {
        Some(path) => ResolveParams::from_json_file(path)?,
        None => ResolveParams::default(),
    };
    if let Some(format) = args.format {
        params.format = format;
    }
    if let Some(recipe) = &args.recipe {
        params.recipe = Some(recipe.clone());
    }
    params.validate()?;
    Ok(params)
}

fn print_product(
    product: &ResolvedProduct,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => print!("{}", render_text(product)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&render_json(product)?)?),
    }
    Ok(())
}

fn single_product_files(args: &CliArgs) -> Result<(String, Vec<(PathBuf, FileClass)>), AppError> {
    let imagery = args.imagery.clone().ok_or(AppError::MissingArgument {
        arg: "--imagery".to_string(),
    })?;

    let mut files: Vec<(PathBuf, FileClass)> = args
        .leader
        .iter()
        .map(|p| (p.clone(), FileClass::Leader))
        .collect();
    files.push((imagery.clone(), FileClass::ImageryOptions));
    if let Some(trailer) = &args.trailer {
        files.push((trailer.clone(), FileClass::Trailer));
    }

    let name = imagery
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| imagery.display().to_string());
    Ok((name, files))
}

fn write_reports(
    output_dir: &Path,
    products: &[ResolvedProduct],
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;
    for product in products {
        write_report_sidecar(output_dir, product)?;
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if args.list_recipes {
        for (rank, recipe) in RecipeCatalog::builtin().recipes().iter().enumerate() {
            println!("{}. {} ({:?})", rank + 1, recipe.name, recipe.matcher);
        }
        return Ok(());
    }

    let params = build_params(&args)?;

    if let Some(input_dir) = &args.input_dir {
        info!("Starting batch resolution from directory: {:?}", input_dir);

        let report = resolve_directory(input_dir, &params, args.keep_going)?;
        for product in &report.products {
            print_product(product, params.format)?;
            if params.format == OutputFormat::Text {
                println!();
            }
        }
        if let Some(output_dir) = &args.output_dir {
            write_reports(output_dir, &report.products)?;
        }

        info!("Batch resolution complete!");
        info!("Resolved: {}", report.resolved);
        info!("Unmatched: {}", report.unmatched);
        info!("Errors: {}", report.errors);
    } else {
        let (name, files) = single_product_files(&args)?;
        let product = resolve_product(&name, &files, &params)?;
        print_product(&product, params.format)?;
        if let Some(output_dir) = &args.output_dir {
            write_reports(output_dir, std::slice::from_ref(&product))?;
        }
    }

    Ok(())
}
