//! Show command implementation.
//!
//! Displays one book with its reservation and borrower, if any.

use crate::error::CliError;
use crate::utils::{json_error, load_configuration, open_database, or_dash, GlobalOptions};
use catalog::BookView;
use clap::{Args, ValueEnum};
use std::io::Write;

/// Show a book's details.
#[derive(Args)]
pub struct ShowCommand {
    /// Book identifier
    #[arg(value_name = "BOOK_ID")]
    pub book_id: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: DetailFormat,
}

/// Output format for a single book.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DetailFormat {
    /// One `field: value` line per field
    Table,
    /// JSON object
    Json,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let view = db.get_book_detail(&self.book_id).map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            DetailFormat::Table => write_detail(&mut handle, &view)?,
            DetailFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &view).map_err(json_error)?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}

/// Writes the detail block; borrower lines only appear for reserved books.
fn write_detail(out: &mut impl Write, view: &BookView) -> std::io::Result<()> {
    writeln!(out, "Book ID: {}", view.book.id)?;
    writeln!(out, "Title: {}", view.book.title)?;
    writeln!(out, "Author: {}", view.book.author)?;
    writeln!(out, "ISBN: {}", view.book.isbn)?;
    writeln!(out, "Status: {}", view.book.status)?;
    if view.is_reserved() {
        writeln!(
            out,
            "Reservation Date: {}",
            or_dash(view.reservation_date.as_deref())
        )?;
        writeln!(out, "Reserved by:")?;
        writeln!(out, "  User ID: {}", or_dash(view.user_id.as_deref()))?;
        writeln!(out, "  Name: {}", or_dash(view.user_name.as_deref()))?;
        writeln!(out, "  Email: {}", or_dash(view.user_email.as_deref()))?;
    }
    Ok(())
}
