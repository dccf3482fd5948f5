use super::{CommandHandler, CommandResult};
use crate::catalog::CatalogStore;
use crate::cli::render::{self, OutputFormat};
use crate::Result;

/// Handler for the `stats` command
pub struct StatsCommand {
    pub format: OutputFormat,
}

impl CommandHandler for StatsCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<CommandResult> {
        let stats = store.statistics();
        Ok(CommandResult::Success(Some(render::stats(&stats, self.format)?)))
    }

    fn name(&self) -> &'static str {
        "stats"
    }
}

impl StatsCommand {
    /// Create new stats command
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}
