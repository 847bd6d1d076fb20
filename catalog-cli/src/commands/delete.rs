//! Delete command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;

/// Delete a book and its reservations.
#[derive(Args)]
pub struct DeleteCommand {
    /// Book identifier
    #[arg(value_name = "BOOK_ID")]
    pub book_id: String,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let removed = db.delete_book(&self.book_id).map_err(CliError::from)?;

        if !global.quiet {
            if removed == 0 {
                eprintln!("Deleted book {}", self.book_id);
            } else {
                eprintln!(
                    "Deleted book {} and {removed} reservation(s)",
                    self.book_id
                );
            }
        }

        Ok(())
    }
}
