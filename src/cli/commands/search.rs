use super::{CommandHandler, CommandResult};
use crate::catalog::{CatalogStore, SearchField};
use crate::cli::render::{self, OutputFormat};
use crate::Result;

/// Handler for the `search` command
pub struct SearchCommand {
    pub field: String,
    pub query: String,
    pub format: OutputFormat,
}

impl CommandHandler for SearchCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<CommandResult> {
        let field: SearchField = self.field.parse()?;
        let results = store.search(field, &self.query)?;

        match render::records(results, self.format)? {
            Some(output) => Ok(CommandResult::Success(Some(output))),
            None => Ok(CommandResult::Empty("No matching books found.".to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

impl SearchCommand {
    /// Create new search command
    pub fn new(field: String, query: String, format: OutputFormat) -> Self {
        Self {
            field,
            query,
            format,
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

    fn create_test_store() -> (CatalogStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CatalogStore::open(temp_dir.path().join("library.json")).unwrap();
        store
            .add(Record::new("Dune", "Frank Herbert", 1965, "Science Fiction", true).unwrap())
            .unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_search_command_unknown_field() {
        let (mut store, _temp_dir) = create_test_store();

        let command = SearchCommand::new("isbn".to_string(), "123".to_string(), OutputFormat::Table);
        assert!(matches!(
            command.execute(&mut store),
            Err(LibraryError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_search_command_no_match() {
        let (mut store, _temp_dir) = create_test_store();

        let command = SearchCommand::new("year".to_string(), "1999".to_string(), OutputFormat::Table);
        assert_eq!(
            command.execute(&mut store).unwrap(),
            CommandResult::Empty("No matching books found.".to_string())
        );
    }

    #[test]
    fn test_search_command_match() {
        let (mut store, _temp_dir) = create_test_store();

        let command = SearchCommand::new("Author".to_string(), "frank herbert".to_string(), OutputFormat::Json);
        let result = command.execute(&mut store).unwrap();
        let parsed: Vec<Record> = serde_json::from_str(result.message().unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "Dune");
    }
}
