use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::render::OutputFormat;
use crate::config::{CliOverrides, LogLevel};

/// Bookshelf: a personal library catalog
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Personal library catalog manager")]
#[command(
    long_about = "Bookshelf records the books you own (title, author, year, genre, read status) in a local JSON file and lets you search and summarize the collection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog file (default: ./library.json or catalog_path from the settings file)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Settings file (default: config.yaml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Set log level
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Command line values that take precedence over the settings file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            catalog_path: self.catalog.clone(),
            log_level: self.log_level,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Publication year
        #[arg(long, allow_negative_numbers = true)]
        year: i32,

        #[arg(long)]
        genre: String,

        /// Mark the book as read
        #[arg(long)]
        read: bool,
    },

    /// Remove every book with the given title (case-insensitive)
    Remove { title: String },

    /// Edit the first book with the given title (case-insensitive)
    Edit {
        title: String,

        /// New title
        #[arg(long = "title", id = "new_title")]
        new_title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        year: Option<i32>,

        #[arg(long)]
        genre: Option<String>,

        /// Read status (true or false)
        #[arg(long)]
        read: Option<bool>,
    },

    /// List all books
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Search books by exact (case-insensitive) field value
    Search {
        /// Field to search: title, author, year or genre
        field: String,

        query: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Display catalog statistics
    Stats {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Write the catalog to another file
    Export { path: PathBuf },

    /// Replace the catalog with the contents of another file
    Import { path: PathBuf },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::Remove { .. } => "remove",
            Commands::Edit { .. } => "edit",
            Commands::List { .. } => "list",
            Commands::Search { .. } => "search",
            Commands::Stats { .. } => "stats",
            Commands::Export { .. } => "export",
            Commands::Import { .. } => "import",
        }
    }

    /// Check if this command changes the catalog
    pub fn modifies_catalog(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. } | Commands::Remove { .. } | Commands::Edit { .. } | Commands::Import { .. }
        )
    }
}
