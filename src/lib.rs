#![doc = r#"
SARCEOS: image layout resolution for CEOS SAR products.

CEOS products (RadarSat, JERS, ERS, SIR-C, ALOS PALSAR and friends) do not
store one authoritative description of their raster. Producers put the pixel
count, record size, data type and interleaving at different offsets, and
sometimes leave them out. This crate resolves a consistent image descriptor
by trying a fixed, ordered list of recipes, each a table of field positions,
until one yields a descriptor that passes validation.

Stability
---------
The public library API is experimental in initial releases and may evolve.

Add dependency
--------------
```toml
[dependencies]
sarceos = "0.1"
```

Quick start: resolve a product from its files
---------------------------------------------
```rust,no_run
use std::path::PathBuf;
use sarceos::{resolve_product, FileClass, ResolveParams};

fn main() -> sarceos::Result<()> {
    let files = vec![
        (PathBuf::from("/data/scene/LEA_01.001"), FileClass::Leader),
        (PathBuf::from("/data/scene/DAT_01.001"), FileClass::ImageryOptions),
    ];
    let product = resolve_product("scene", &files, &ResolveParams::default())?;

    match product.recipe {
        Some(recipe) => println!(
            "{}: {} x {} pixels ({})",
            recipe,
            product.descriptor.pixels_per_line,
            product.descriptor.lines,
            product.descriptor.data_type
        ),
        None => println!("no recipe matched"),
    }
    Ok(())
}
```

Resolve records you already hold
--------------------------------
Anything implementing [`RecordStore`] can be resolved; [`CeosVolume`] is the
in-memory store built from framed records.

```rust
use sarceos::{CeosVolume, RecipeCatalog};

let mut volume = CeosVolume::new();
// volume.push(record) for each framed record...
let matched = volume.resolve_image_desc(RecipeCatalog::builtin());
assert!(!matched);
assert!(!volume.image_desc.valid);
```

Diagnostics
-----------
The resolver reports which recipe matched and why attempts were rejected via
`tracing`. Install [`diagnostics::DiagnosticsLayer`] to receive those events
in a callback.

Error handling
--------------
A product that matches no recipe is not an error: the descriptor is left
invalid. Functions that touch files return `sarceos::Result<T>`.

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: field decoding, recipe tables, matchers and the catalog.
- [`io`]: record store, CEOS framing, product layout and report writers.
- [`types`]: data type, interleaving and output format enums.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::catalog::{ProductRecipe, RecipeCatalog, Resolution};
pub use core::descriptor::ImageDescriptor;
pub use core::matchers::Matcher;
pub use core::params::ResolveParams;
pub use error::{Error, Result};
pub use types::{DataType, Interleaving, OutputFormat};

// Records
pub use io::record::{CeosRecord, CeosVolume, FileClass, Record, RecordSignature, RecordStore};

// High-level API re-exports
pub use api::{
    BatchReport, ResolvedProduct, iterate_products, resolve_directory, resolve_product,
    resolve_product_dir, resolve_volume,
};
