use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::io::record::{CeosRecord, FileClass, RecordSignature};

/// Length of the prefix every CEOS record starts with: sequence number,
/// four signature bytes and the record length.
pub const RECORD_PREFIX_LEN: usize = 12;

/// Errors encountered when framing CEOS files
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Record {sequence} declares length {length}, shorter than its {RECORD_PREFIX_LEN}-byte prefix")]
    BadLength { sequence: u32, length: u32 },
    #[error("Record {sequence} truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        sequence: u32,
        expected: usize,
        actual: usize,
    },
    #[error("Empty CEOS file: {0}")]
    Empty(String),
}

/// Open a CEOS file and frame its records.
pub fn read_file(
    path: &Path,
    class: FileClass,
    limit: Option<usize>,
) -> Result<Vec<CeosRecord>, ContainerError> {
    let file = File::open(path)?;
    let records = read_records(BufReader::new(file), class, limit)?;
    if records.is_empty() {
        return Err(ContainerError::Empty(path.display().to_string()));
    }
    Ok(records)
}

/// Frame records from `reader` until end of input or until `limit` records
/// have been read.
pub fn read_records<R: Read>(
    mut reader: R,
    class: FileClass,
    limit: Option<usize>,
) -> Result<Vec<CeosRecord>, ContainerError> {
    let mut records = Vec::new();

    loop {
        if limit.is_some_and(|max| records.len() >= max) {
            break;
        }

        // Grown as bytes arrive; the declared length is not trusted.
        let mut bytes = Vec::with_capacity(RECORD_PREFIX_LEN);
        let got = reader
            .by_ref()
            .take(RECORD_PREFIX_LEN as u64)
            .read_to_end(&mut bytes)?;
        if got == 0 {
            break;
        }
        if got < RECORD_PREFIX_LEN {
            bytes.resize(RECORD_PREFIX_LEN, 0);
            return Err(ContainerError::Truncated {
                sequence: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
                expected: RECORD_PREFIX_LEN,
                actual: got,
            });
        }

        let sequence = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

        let signature = RecordSignature::from_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let length = u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        if (length as usize) < RECORD_PREFIX_LEN {
            return Err(ContainerError::BadLength { sequence, length });
        }

        let body = reader
            .by_ref()
            .take(u64::from(length) - RECORD_PREFIX_LEN as u64)
            .read_to_end(&mut bytes)?;
        if body + RECORD_PREFIX_LEN < length as usize {
            return Err(ContainerError::Truncated {
                sequence,
                expected: length as usize,
                actual: body + RECORD_PREFIX_LEN,
            });
        }

        debug!(
            "Record {} [{}] {} bytes ({})",
            sequence, signature, length, class
        );
        records.push(CeosRecord::new(sequence, signature, class, bytes));
    }

    Ok(records)
}
