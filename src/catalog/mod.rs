pub mod manager;
pub mod query;
pub mod types;

pub use manager::CatalogStore;
pub use query::{CatalogQuery, CatalogStats};
pub use types::{Record, RecordPatch, SearchField};
