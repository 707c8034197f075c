//! File naming conventions of CEOS product directories.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::io::record::FileClass;

/// Guess which part of a CEOS product a file is from its name.
///
/// Covers the common conventions: `LEA_01.001` / `LED-...` / `*.ldr`,
/// `DAT_01.001` / `IMG-HH-...` / `*.dat`, `TRA_01.001` / `TRL-...` / `*.tra`,
/// `VDF_DAT.001` / `VOL-...` / `*.vol` and `NUL_DAT.001` / `*.nul`.
pub fn classify(path: &Path) -> Option<FileClass> {
    let name = path.file_name()?.to_str()?.to_ascii_uppercase();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if name.starts_with("LEA") || name.starts_with("LED") || ext == "ldr" {
        Some(FileClass::Leader)
    } else if name.starts_with("DAT") || name.starts_with("IMG") || ext == "dat" {
        Some(FileClass::ImageryOptions)
    } else if name.starts_with("TRA") || name.starts_with("TRL") || ext == "tra" {
        Some(FileClass::Trailer)
    } else if name.starts_with("VDF") || name.starts_with("VOL") || ext == "vol" {
        Some(FileClass::VolumeDirectory)
    } else if name.starts_with("NUL") || ext == "nul" {
        Some(FileClass::Null)
    } else {
        None
    }
}

/// Classified files of one product directory, leader files first so that
/// records are stored in the order a reader would meet them.
pub fn product_files(dir: &Path) -> std::io::Result<Vec<(PathBuf, FileClass)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match classify(&path) {
            Some(class) => files.push((path, class)),
            None => debug!("Ignoring unrecognised file {:?}", path),
        }
    }
    files.sort_by(|a, b| rank(a.1).cmp(&rank(b.1)).then_with(|| a.0.cmp(&b.0)));
    Ok(files)
}

fn rank(class: FileClass) -> u8 {
    match class {
        FileClass::VolumeDirectory => 0,
        FileClass::Leader => 1,
        FileClass::ImageryOptions => 2,
        FileClass::Trailer => 3,
        FileClass::Null | FileClass::Any => 4,
    }
}
