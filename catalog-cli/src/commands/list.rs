//! List command implementation.
//!
//! This module implements the `list` command, which displays every book
//! with its reservation and borrower in various formats (table, JSON, CSV,
//! TSV).

use crate::error::CliError;
use crate::utils::{csv_error, json_error, load_configuration, open_database, or_dash, GlobalOptions};
use catalog::BookView;
use clap::{Args, ValueEnum};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 9] = [
    "book_id",
    "title",
    "author",
    "isbn",
    "status",
    "reservation_date",
    "user_id",
    "user_name",
    "user_email",
];

/// List all books.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "CATALOG_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only show reserved books
    #[arg(long)]
    pub reserved_only: bool,
}

/// Output format for tabular commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open database
        let db = open_database(global, &config)?;

        // 3. Query books
        let mut books = db.list_all_books().map_err(CliError::from)?;

        if self.reserved_only {
            books.retain(BookView::is_reserved);
        }

        // 4. Format and output to stdout
        match self.format {
            OutputFormat::Table => {
                if books.is_empty() {
                    if !global.quiet {
                        eprintln!("No books found in the library");
                    }
                    return Ok(());
                }
                format_as_table(&books)?;
            }
            OutputFormat::Json => format_as_json(&books)?,
            OutputFormat::Csv => format_as_delimited(&books, b',')?,
            OutputFormat::Tsv => format_as_delimited(&books, b'\t')?,
        }

        Ok(())
    }
}

/// Format books as a human-readable table.
fn format_as_table(books: &[BookView]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for view in books {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            view.book.id,
            view.book.title,
            view.book.author,
            view.book.isbn,
            view.book.status,
            or_dash(view.reservation_date.as_deref()),
            or_dash(view.user_id.as_deref()),
            or_dash(view.user_name.as_deref()),
            or_dash(view.user_email.as_deref()),
        )?;
    }

    Ok(())
}

/// Format books as a JSON array.
fn format_as_json(books: &[BookView]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, books).map_err(json_error)?;
    writeln!(handle)?;

    Ok(())
}

/// Format books as delimited output (CSV or TSV).
fn format_as_delimited(books: &[BookView], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for view in books {
        writer
            .write_record([
                view.book.id.as_str(),
                view.book.title.as_str(),
                view.book.author.as_str(),
                view.book.isbn.as_str(),
                view.book.status.to_string().as_str(),
                view.reservation_date.as_deref().unwrap_or(""),
                view.user_id.as_deref().unwrap_or(""),
                view.user_name.as_deref().unwrap_or(""),
                view.user_email.as_deref().unwrap_or(""),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
