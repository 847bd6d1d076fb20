//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, AddUserCommand, DeleteCommand, ListCommand, ReserveCommand, SearchCommand,
    ShowCommand, UpdateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing a small library catalog.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(version, about = "Manage a library catalog of books and reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "CATALOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "CATALOG_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "CATALOG_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a new book
    Add(AddCommand),

    /// Show a book's details
    Show(ShowCommand),

    /// Find reservations by book id, title, user id or reservation id
    Search(SearchCommand),

    /// List all books
    List(ListCommand),

    /// Update a book's details
    Update(UpdateCommand),

    /// Delete a book and its reservations
    Delete(DeleteCommand),

    /// Register a borrower
    AddUser(AddUserCommand),

    /// Reserve a book for a borrower
    Reserve(ReserveCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["catalog", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["catalog", "list", "--data-dir", "/tmp/lib"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/lib")));
        assert!(matches!(cli.command, Command::List(_)));
    }
}
