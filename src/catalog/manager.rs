use crate::catalog::query::{CatalogQuery, CatalogStats};
use crate::catalog::types::{Record, RecordPatch, SearchField};
use crate::io::{document, LoadStatus};
use crate::{LibraryError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Owns the in-memory catalog and keeps its document on disk in sync
pub struct CatalogStore {
    /// Default catalog document
    path: PathBuf,
    /// Records in insertion order
    records: Vec<Record>,
    /// How the catalog was obtained at open time
    load_status: LoadStatus,
}

impl CatalogStore {
    /// Open the catalog stored at `path`, starting empty if there is none
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let (records, load_status) = document::load(&path)?;
        Ok(Self {
            path,
            records,
            load_status,
        })
    }

    /// Add a record to the end of the catalog and save
    pub fn add(&mut self, record: Record) -> Result<()> {
        record.validate()?;
        let title = record.title.clone();

        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)?;

        info!("Added '{}'", title);
        Ok(())
    }

    /// Remove every record whose title matches case-insensitively.
    /// Returns how many were removed.
    pub fn remove(&mut self, title: &str) -> Result<usize> {
        let next: Vec<Record> = self
            .records
            .iter()
            .filter(|record| !record.title_matches(title))
            .cloned()
            .collect();

        let removed = self.records.len() - next.len();
        if removed == 0 {
            return Err(LibraryError::NotFound {
                title: title.to_string(),
            });
        }

        self.commit(next)?;
        info!("Removed {} record(s) titled '{}'", removed, title);
        Ok(removed)
    }

    /// Apply `patch` to the first record whose title matches
    /// case-insensitively, returning the updated record.
    pub fn edit(&mut self, title: &str, patch: &RecordPatch) -> Result<&Record> {
        let index = self
            .records
            .iter()
            .position(|record| record.title_matches(title))
            .ok_or_else(|| LibraryError::NotFound {
                title: title.to_string(),
            })?;

        let updated = self.records[index].merged(patch);
        updated.validate()?;

        let mut next = self.records.clone();
        next[index] = updated;
        self.commit(next)?;

        info!("Edited '{}'", title);
        Ok(&self.records[index])
    }

    /// Ordered snapshot of the catalog
    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    /// Records whose `field` equals `query`, see [`CatalogQuery::search`]
    pub fn search(&self, field: SearchField, query: &str) -> Result<Vec<&Record>> {
        CatalogQuery::new(&self.records).search(field, query)
    }

    /// Aggregate statistics over the whole catalog
    pub fn statistics(&self) -> CatalogStats {
        CatalogQuery::new(&self.records).statistics()
    }

    /// Write the catalog to its default document
    pub fn save(&self) -> Result<()> {
        document::save(&self.path, &self.records)
    }

    /// Write the catalog to an arbitrary path, returning the record count
    pub fn export(&self, path: &Path) -> Result<usize> {
        document::export(path, &self.records)?;
        Ok(self.records.len())
    }

    /// Replace the whole catalog with the contents of `path`.
    /// On any failure the current catalog is left untouched.
    pub fn import(&mut self, path: &Path) -> Result<usize> {
        let records = document::import(path)?;
        let count = records.len();
        self.commit(records)?;
        Ok(count)
    }

    /// Default document path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the catalog was loaded from disk or started empty
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Persist `next` and only then make it the in-memory catalog
    fn commit(&mut self, next: Vec<Record>) -> Result<()> {
        document::save(&self.path, &next)?;
        debug!("Committed catalog with {} records", next.len());
        self.records = next;
        Ok(())
    }
}
