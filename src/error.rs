use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("No book found with title '{title}'")]
    NotFound { title: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Persistence error for {}: {kind}", .path.display())]
    Persistence { path: PathBuf, kind: PersistenceKind },

    #[error("Division error: {0}")]
    Division(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// What went wrong while reading or writing a catalog document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceKind {
    /// The file does not exist
    NotFound,
    /// The file exists but is not a valid catalog document
    Malformed(String),
    /// Any other I/O failure (permissions, disk full, ...)
    Io(String),
}

impl fmt::Display for PersistenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceKind::NotFound => write!(f, "file not found"),
            PersistenceKind::Malformed(msg) => write!(f, "malformed content: {}", msg),
            PersistenceKind::Io(msg) => write!(f, "I/O failure: {}", msg),
        }
    }
}

impl LibraryError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        LibraryError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn persistence(path: impl Into<PathBuf>, kind: PersistenceKind) -> Self {
        LibraryError::Persistence {
            path: path.into(),
            kind,
        }
    }

    /// Map an I/O error on `path` onto the persistence taxonomy
    pub fn from_io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => PersistenceKind::NotFound,
            _ => PersistenceKind::Io(err.to_string()),
        };
        Self::persistence(path, kind)
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_message_names_field() {
        let err = LibraryError::validation("year", "must be greater than 0");
        assert_eq!(err.to_string(), "Invalid year: must be greater than 0");
    }

    #[test]
    fn test_io_not_found_maps_to_not_found_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match LibraryError::from_io("missing.json", &io) {
            LibraryError::Persistence { path, kind } => {
                assert_eq!(path, PathBuf::from("missing.json"));
                assert_eq!(kind, PersistenceKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_persistence_message_includes_path() {
        let err = LibraryError::persistence(
            "/tmp/books.json",
            PersistenceKind::Malformed("expected value".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Persistence error for /tmp/books.json: malformed content: expected value"
        );
    }
}
