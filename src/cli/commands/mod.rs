pub mod add;
pub mod edit;
pub mod list;
pub mod remove;
pub mod search;
pub mod stats;
pub mod transfer;

use super::app::Commands;
use crate::catalog::CatalogStore;
use crate::Result;

pub use add::AddCommand;
pub use edit::EditCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use search::SearchCommand;
pub use stats::StatsCommand;
pub use transfer::{ExportCommand, ImportCommand};

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command against the catalog
    fn execute(&self, store: &mut CatalogStore) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command execution result
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Success with optional output
    Success(Option<String>),
    /// Nothing went wrong but there is nothing to show
    Empty(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::Empty(_) => 0,
        }
    }

    /// Get message if any
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandResult::Success(msg) => msg.as_deref(),
            CommandResult::Empty(msg) => Some(msg),
        }
    }
}

/// Build the handler for a parsed subcommand
pub fn handler_for(command: Commands) -> Box<dyn CommandHandler> {
    match command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => Box::new(AddCommand::new(title, author, year, genre, read)),
        Commands::Remove { title } => Box::new(RemoveCommand::new(title)),
        Commands::Edit {
            title,
            new_title,
            author,
            year,
            genre,
            read,
        } => Box::new(EditCommand::new(title, new_title, author, year, genre, read)),
        Commands::List { format } => Box::new(ListCommand::new(format)),
        Commands::Search {
            field,
            query,
            format,
        } => Box::new(SearchCommand::new(field, query, format)),
        Commands::Stats { format } => Box::new(StatsCommand::new(format)),
        Commands::Export { path } => Box::new(ExportCommand::new(path)),
        Commands::Import { path } => Box::new(ImportCommand::new(path)),
    }
}
