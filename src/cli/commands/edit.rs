use super::{CommandHandler, CommandResult};
use crate::catalog::{CatalogStore, RecordPatch};
use crate::Result;
use tracing::debug;

/// Handler for the `edit` command
pub struct EditCommand {
    pub title: String,
    pub patch: RecordPatch,
}

impl CommandHandler for EditCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<CommandResult> {
        if self.patch.is_empty() {
            debug!("Edit of '{}' carries no changes", self.title);
        }
        let updated = store.edit(&self.title, &self.patch)?;
        Ok(CommandResult::Success(Some(format!(
            "Updated '{}' ({}, {}, {}, {})",
            updated.title,
            updated.author,
            updated.year,
            updated.genre,
            if updated.is_read { "read" } else { "unread" }
        ))))
    }

    fn name(&self) -> &'static str {
        "edit"
    }
}

impl EditCommand {
    /// Create new edit command
    pub fn new(
        title: String,
        new_title: Option<String>,
        author: Option<String>,
        year: Option<i32>,
        genre: Option<String>,
        read: Option<bool>,
    ) -> Self {
        Self {
            title,
            patch: RecordPatch {
                title: new_title,
                author,
                year,
                genre,
                is_read: read,
            },
        }
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
    fn test_edit_command() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CatalogStore::open(temp_dir.path().join("library.json")).unwrap();
        store
            .add(Record::new("Dune", "Frank Herbert", 1965, "Science Fiction", false).unwrap())
            .unwrap();

        let command = EditCommand::new(
            "DUNE".to_string(),
            None,
            Some(String::new()),
            None,
            None,
            Some(true),
        );
        let result = command.execute(&mut store).unwrap();

        assert_eq!(
            result.message(),
            Some("Updated 'Dune' (Frank Herbert, 1965, Science Fiction, read)")
        );
        assert!(store.list_all()[0].is_read);
    }

    #[test]
    fn test_edit_command_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CatalogStore::open(temp_dir.path().join("library.json")).unwrap();

        let command = EditCommand::new("Dune".to_string(), None, None, Some(2000), None, None);
        assert!(matches!(
            command.execute(&mut store),
            Err(LibraryError::NotFound { .. })
        ));
    }
}
