use super::{CommandHandler, CommandResult};
use crate::catalog::CatalogStore;
use crate::Result;
use std::path::PathBuf;

/// Handler for the `export` command
pub struct ExportCommand {
    pub path: PathBuf,
}

impl CommandHandler for ExportCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<CommandResult> {
        let count = store.export(&self.path)?;
        Ok(CommandResult::Success(Some(format!(
            "Exported {} book(s) to {}",
            count,
            self.path.display()
        ))))
    }

    fn name(&self) -> &'static str {
        "export"
    }
}

impl ExportCommand {
    /// Create new export command
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Handler for the `import` command
pub struct ImportCommand {
    pub path: PathBuf,
}

impl CommandHandler for ImportCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<CommandResult> {
        let count = store.import(&self.path)?;
        Ok(CommandResult::Success(Some(format!(
            "Imported {} book(s) from {}",
            count,
            self.path.display()
        ))))
    }

    fn name(&self) -> &'static str {
        "import"
    }
}

impl ImportCommand {
    /// Create new import command
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}
