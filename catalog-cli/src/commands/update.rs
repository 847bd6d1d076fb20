//! Update command implementation.
//!
//! Only the fields given on the command line are written. Empty values are
//! ignored, so `--title ""` leaves the title alone.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use catalog::{BookUpdate, UpdateOutcome};
use clap::Args;

/// Update a book's details.
#[derive(Args)]
pub struct UpdateCommand {
    /// Book identifier
    #[arg(value_name = "BOOK_ID")]
    pub book_id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New author
    #[arg(long)]
    pub author: Option<String>,

    /// New ISBN
    #[arg(long)]
    pub isbn: Option<String>,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let update = BookUpdate {
            title: self.title,
            author: self.author,
            isbn: self.isbn,
        };

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let outcome = db
            .update_book(&self.book_id, &update)
            .map_err(CliError::from)?;

        if !global.quiet {
            match outcome {
                UpdateOutcome::NoChanges => {
                    eprintln!("No changes provided; book details remain unchanged");
                }
                UpdateOutcome::Updated { fields } => {
                    eprintln!("Updated book {}: {}", self.book_id, fields.join(", "));
                }
            }
        }

        Ok(())
    }
}
