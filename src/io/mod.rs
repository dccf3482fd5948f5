pub mod document;
pub mod paths;

pub use document::{EmptyReason, LoadStatus};
pub use paths::BookshelfPaths;
