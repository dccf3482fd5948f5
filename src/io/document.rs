//! JSON document persistence for the catalog
//!
//! The document is a top-level array of records, pretty-printed with
//! four-space indentation. Writes encode the whole catalog in memory first and
//! only then touch the file.

use crate::catalog::Record;
use crate::error::PersistenceKind;
use crate::{LibraryError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of loading the default catalog at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The document was read and decoded
    Loaded { count: usize },
    /// Nothing usable on disk; the catalog starts empty
    StartedEmpty { reason: EmptyReason },
}

/// Why [`load`] fell back to an empty catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    Missing,
    Unparseable(String),
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded { .. })
    }
}

/// Load the catalog document at `path`.
///
/// A missing or undecodable file is the first-run path and yields an empty
/// catalog. Any other read failure is returned as an error so the caller
/// doesn't overwrite a file it couldn't read.
pub fn load(path: &Path) -> Result<(Vec<Record>, LoadStatus)> {
    match read_document(path) {
        Ok(records) => {
            info!("Loaded {} records from {}", records.len(), path.display());
            let count = records.len();
            Ok((records, LoadStatus::Loaded { count }))
        }
        Err(LibraryError::Persistence {
            kind: PersistenceKind::NotFound,
            ..
        }) => {
            debug!("No catalog at {}, starting empty", path.display());
            Ok((
                Vec::new(),
                LoadStatus::StartedEmpty {
                    reason: EmptyReason::Missing,
                },
            ))
        }
        Err(LibraryError::Persistence {
            kind: PersistenceKind::Malformed(msg),
            ..
        }) => {
            warn!(
                "Catalog at {} could not be decoded ({}), starting empty",
                path.display(),
                msg
            );
            Ok((
                Vec::new(),
                LoadStatus::StartedEmpty {
                    reason: EmptyReason::Unparseable(msg),
                },
            ))
        }
        Err(e) => Err(e),
    }
}

/// Overwrite `path` with the given records
pub fn save(path: &Path, records: &[Record]) -> Result<()> {
    let content = encode(records).map_err(|e| {
        LibraryError::persistence(path, PersistenceKind::Malformed(e.to_string()))
    })?;
    fs::write(path, content).map_err(|e| LibraryError::from_io(path, &e))?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Write the records to a caller-chosen path
pub fn export(path: &Path, records: &[Record]) -> Result<()> {
    save(path, records)?;
    info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read records from a caller-chosen path. Unlike [`load`], a missing or
/// malformed file is an error.
pub fn import(path: &Path) -> Result<Vec<Record>> {
    let records = read_document(path)?;
    info!("Imported {} records from {}", records.len(), path.display());
    Ok(records)
}

fn read_document(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read(path).map_err(|e| LibraryError::from_io(path, &e))?;
    decode(&content).map_err(|msg| LibraryError::persistence(path, PersistenceKind::Malformed(msg)))
}

fn decode(content: &[u8]) -> std::result::Result<Vec<Record>, String> {
    let records: Vec<Record> = serde_json::from_slice(content).map_err(|e| e.to_string())?;
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|e| format!("record {}: {}", index, e))?;
    }
    Ok(records)
}

fn encode(records: &[Record]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}
