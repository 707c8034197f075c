use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::catalog::{RecipeCatalog, Resolution};
use crate::core::descriptor::ImageDescriptor;
use crate::io::container::{self, ContainerError};

/// Four-byte record type code, in the on-disk order of prefix bytes 5..=8.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct RecordSignature {
    pub subtype1: u8,
    pub record_type: u8,
    pub subtype2: u8,
    pub subtype3: u8,
}

impl RecordSignature {
    pub const fn new(subtype1: u8, record_type: u8, subtype2: u8, subtype3: u8) -> Self {
        Self {
            subtype1,
            record_type,
            subtype2,
            subtype3,
        }
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.subtype1, self.record_type, self.subtype2, self.subtype3]
    }
}

impl fmt::Display for RecordSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}-{:02X}-{:02X}-{:02X}",
            self.subtype1, self.record_type, self.subtype2, self.subtype3
        )
    }
}

/// Coarse partition of a CEOS product a record was read from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FileClass {
    VolumeDirectory,
    Leader,
    ImageryOptions,
    Trailer,
    Null,
    /// Lookup wildcard; matches records of every class.
    Any,
}

impl FileClass {
    /// Whether a record of class `record_class` satisfies a lookup for `self`.
    pub fn admits(self, record_class: FileClass) -> bool {
        self == FileClass::Any || self == record_class
    }
}

impl fmt::Display for FileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileClass::VolumeDirectory => "volume-directory",
            FileClass::Leader => "leader",
            FileClass::ImageryOptions => "imagery-options",
            FileClass::Trailer => "trailer",
            FileClass::Null => "null",
            FileClass::Any => "any",
        };
        write!(f, "{}", s)
    }
}

/// Byte-addressable view of one physical record.
pub trait Record {
    /// Physical length of the record, prefix included.
    fn length(&self) -> usize;

    /// Raw bytes of a field at a 1-based `offset`, or `None` if the range
    /// does not lie inside the record.
    fn field(&self, offset: usize, length: usize) -> Option<&[u8]>;
}

/// Lookup of records by signature and file class.
pub trait RecordStore {
    fn find_record(&self, signature: RecordSignature, class: FileClass) -> Option<&dyn Record>;
}

/// A framed CEOS record held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CeosRecord {
    pub sequence: u32,
    pub signature: RecordSignature,
    pub file_class: FileClass,
    bytes: Vec<u8>,
}

impl CeosRecord {
    /// `bytes` is the whole record, 12-byte prefix included.
    pub fn new(
        sequence: u32,
        signature: RecordSignature,
        file_class: FileClass,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            sequence,
            signature,
            file_class,
            bytes,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Record for CeosRecord {
    fn length(&self) -> usize {
        self.bytes.len()
    }

    fn field(&self, offset: usize, length: usize) -> Option<&[u8]> {
        let start = offset.checked_sub(1)?;
        let end = start.checked_add(length)?;
        self.bytes.get(start..end)
    }
}

/// All records of one product plus the image descriptor resolved for it.
#[derive(Debug, Clone, Default)]
pub struct CeosVolume {
    records: Vec<CeosRecord>,
    pub image_desc: ImageDescriptor,
    pub recipe: Option<&'static str>,
}

impl CeosVolume {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CeosRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Frame every file of a product and collect its records in the given
    /// order. `imagery_limit` bounds how many records are read from imagery
    /// files, which otherwise hold the whole raster.
    pub fn open<P: AsRef<Path>>(
        files: &[(P, FileClass)],
        imagery_limit: Option<usize>,
    ) -> Result<Self, ContainerError> {
        let mut volume = Self::new();
        for (path, class) in files {
            let limit = match class {
                FileClass::ImageryOptions => imagery_limit,
                _ => None,
            };
            let records = container::read_file(path.as_ref(), *class, limit)?;
            info!(
                "Framed {} {} record(s) from {:?}",
                records.len(),
                class,
                path.as_ref()
            );
            volume.records.extend(records);
        }
        Ok(volume)
    }

    pub fn push(&mut self, record: CeosRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[CeosRecord] {
        &self.records
    }

    /// Run the catalog against this volume and keep the outcome. When nothing
    /// matches the descriptor is left zeroed and invalid.
    pub fn resolve_image_desc(&mut self, catalog: &RecipeCatalog) -> bool {
        match catalog.resolve(self) {
            Some(Resolution { recipe, descriptor }) => {
                self.image_desc = descriptor;
                self.recipe = Some(recipe);
                true
            }
            None => {
                debug!("No recipe produced a valid image descriptor");
                self.image_desc = ImageDescriptor::default();
                self.recipe = None;
                false
            }
        }
    }
}

impl RecordStore for CeosVolume {
    fn find_record(&self, signature: RecordSignature, class: FileClass) -> Option<&dyn Record> {
        self.records
            .iter()
            .find(|r| r.signature == signature && class.admits(r.file_class))
            .map(|r| r as &dyn Record)
    }
}
