use super::{CommandHandler, CommandResult};
use crate::catalog::CatalogStore;
use crate::Result;

/// Handler for the `remove` command
pub struct RemoveCommand {
    pub title: String,
}

impl CommandHandler for RemoveCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<CommandResult> {
        let removed = store.remove(&self.title)?;
        Ok(CommandResult::Success(Some(format!(
            "Removed {} book(s) titled '{}'",
            removed, self.title
        ))))
    }

    fn name(&self) -> &'static str {
        "remove"
    }
}

impl RemoveCommand {
    /// Create new remove command
    pub fn new(title: String) -> Self {
        Self { title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Record;
    use crate::LibraryError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_remove_command_reports_count() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CatalogStore::open(temp_dir.path().join("library.json")).unwrap();
        store
            .add(Record::new("Dune", "Frank Herbert", 1965, "Science Fiction", true).unwrap())
            .unwrap();
        store
            .add(Record::new("dune", "Someone Else", 2001, "Parody", false).unwrap())
            .unwrap();
        store
            .add(Record::new("Emma", "Jane Austen", 1815, "Romance", false).unwrap())
            .unwrap();

        let result = RemoveCommand::new("DUNE".to_string())
            .execute(&mut store)
            .unwrap();
        assert_eq!(
            result.message(),
            Some("Removed 2 book(s) titled 'DUNE'")
        );
        assert_eq!(result.exit_code(), 0);
        assert_eq!(store.list_all().len(), 1);
        assert_eq!(store.list_all()[0].title, "Emma");
    }

    #[test]
    fn test_remove_command_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CatalogStore::open(temp_dir.path().join("library.json")).unwrap();
        store
            .add(Record::new("Emma", "Jane Austen", 1815, "Romance", false).unwrap())
            .unwrap();

        match RemoveCommand::new("Dune".to_string()).execute(&mut store) {
            Err(LibraryError::NotFound { title }) => assert_eq!(title, "Dune"),
            other => panic!("expected not found, got {:?}", other),
        }
        assert_eq!(store.list_all().len(), 1);
    }
}
