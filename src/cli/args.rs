use clap::Parser;
use std::path::PathBuf;

use sarceos::types::OutputFormat;

#[derive(Parser)]
#[command(name = "sarceos", version, about = "Resolve the image layout of CEOS SAR products")]
pub struct CliArgs {
    /// Imagery options file (single product mode)
    #[arg(short, long)]
    pub imagery: Option<PathBuf>,

    /// Leader file(s) of the product
    #[arg(short, long)]
    pub leader: Vec<PathBuf>,

    /// Trailer file of the product
    #[arg(long)]
    pub trailer: Option<PathBuf>,

    /// Directory holding one product per subdirectory (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Write one JSON report per product into this directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Report format (text or json)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only try this recipe (e.g. RadarSat, Jers, ScanSAR, SIR-C, PALSAR-ALOS)
    #[arg(long)]
    pub recipe: Option<String>,

    /// JSON file with resolution parameters; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List the built-in recipes in match order and exit
    #[arg(long, default_value_t = false)]
    pub list_recipes: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: keep going when a product cannot be read
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,
}
