use super::{CommandHandler, CommandResult};
use crate::catalog::CatalogStore;
use crate::cli::render::{self, OutputFormat};
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    pub format: OutputFormat,
}

impl CommandHandler for ListCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<CommandResult> {
        match render::records(store.list_all(), self.format)? {
            Some(output) => Ok(CommandResult::Success(Some(output))),
            None => Ok(CommandResult::Empty("No books found.".to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    /// Create new list command
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}
