use super::{CommandHandler, CommandResult};
use crate::catalog::{CatalogStore, Record};
use crate::Result;

/// Handler for the `add` command
pub struct AddCommand {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl CommandHandler for AddCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<CommandResult> {
        let record = Record::new(
            self.title.as_str(),
            self.author.as_str(),
            self.year,
            self.genre.as_str(),
            self.read,
        )?;
        let message = format!("Added '{}' by {}", record.title, record.author);
        store.add(record)?;
        Ok(CommandResult::Success(Some(message)))
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

impl AddCommand {
    /// Create new add command
    pub fn new(title: String, author: String, year: i32, genre: String, read: bool) -> Self {
        Self {
            title,
            author,
            year,
            genre,
            read,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LibraryError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_add_command() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CatalogStore::open(temp_dir.path().join("library.json")).unwrap();

        let command = AddCommand::new(
            " Dune ".to_string(),
            "Frank Herbert".to_string(),
            1965,
            "Science Fiction".to_string(),
            true,
        );
        let result = command.execute(&mut store).unwrap();

        assert_eq!(result.message(), Some("Added 'Dune' by Frank Herbert"));
        assert_eq!(store.list_all()[0].title, "Dune");
    }

    #[test]
    fn test_add_command_validation() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CatalogStore::open(temp_dir.path().join("library.json")).unwrap();

        let command = AddCommand::new(
            "Dune".to_string(),
            "".to_string(),
            1965,
            "Science Fiction".to_string(),
            false,
        );

        assert!(matches!(
            command.execute(&mut store),
            Err(LibraryError::Validation { field: "author", .. })
        ));
        assert!(store.is_empty());
    }
}
