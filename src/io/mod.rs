//! I/O layer for CEOS products.
//! Provides the in-memory `record` store the resolver reads from and the
//! `container` framer that splits CEOS files into records.
pub mod container;
pub use container::{ContainerError, read_file, read_records};

pub mod record;
pub use record::{CeosRecord, CeosVolume, FileClass, Record, RecordSignature, RecordStore};

pub mod layout;

pub mod writers;
