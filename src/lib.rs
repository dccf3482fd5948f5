//! Personal library catalog: records books in a local JSON document and
//! answers exact-match searches and summary statistics over them.
//!
//! [`catalog::CatalogStore`] is the entry point. It owns the records, saves
//! the document after every change, and hands out read-only queries.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;

pub use catalog::{CatalogQuery, CatalogStats, CatalogStore, Record, RecordPatch, SearchField};
pub use error::{LibraryError, PersistenceKind, Result};
pub use io::LoadStatus;
