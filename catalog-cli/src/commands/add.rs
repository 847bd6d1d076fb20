//! Add command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use catalog::NewBook;
use clap::Args;

/// Add a new book.
#[derive(Args)]
pub struct AddCommand {
    /// Book identifier
    #[arg(value_name = "BOOK_ID")]
    pub book_id: String,

    /// Title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Author
    #[arg(long, default_value = "")]
    pub author: String,

    /// ISBN
    #[arg(long, default_value = "")]
    pub isbn: String,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let book = NewBook::new(self.book_id, self.title, self.author, self.isbn);

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        db.add_book(&book).map_err(CliError::from)?;

        if !global.quiet {
            eprintln!("Added book {}", book.id);
        }

        Ok(())
    }
}
