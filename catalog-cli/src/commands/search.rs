//! Search command implementation.
//!
//! This module implements the `search` command, which finds reservations
//! by book id, title substring, user id or reservation id.

use crate::commands::list::OutputFormat;
use crate::error::CliError;
use crate::utils::{csv_error, json_error, load_configuration, open_database, or_dash, GlobalOptions};
use catalog::ReservationView;
use clap::Args;
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 5] = [
    "book_id",
    "title",
    "reservation_date",
    "user_name",
    "user_email",
];

/// Search reservations.
#[derive(Args)]
pub struct SearchCommand {
    /// Book id, part of a title, user id or reservation id
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "CATALOG_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let rows = db
            .search_reservations(self.term.as_str())
            .map_err(CliError::from)?;

        match self.format {
            OutputFormat::Table => {
                if rows.is_empty() {
                    if !global.quiet {
                        eprintln!("No reservations found");
                    }
                    return Ok(());
                }
                format_as_table(&rows)?;
            }
            OutputFormat::Json => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                serde_json::to_writer_pretty(&mut handle, &rows).map_err(json_error)?;
                writeln!(handle)?;
            }
            OutputFormat::Csv => format_as_delimited(&rows, b',')?,
            OutputFormat::Tsv => format_as_delimited(&rows, b'\t')?,
        }

        Ok(())
    }
}

fn format_as_table(rows: &[ReservationView]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for row in rows {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}",
            row.book_id,
            row.title,
            or_dash(row.reservation_date.as_deref()),
            or_dash(row.user_name.as_deref()),
            or_dash(row.user_email.as_deref()),
        )?;
    }

    Ok(())
}

fn format_as_delimited(rows: &[ReservationView], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for row in rows {
        writer
            .write_record([
                row.book_id.as_str(),
                row.title.as_str(),
                row.reservation_date.as_deref().unwrap_or(""),
                row.user_name.as_deref().unwrap_or(""),
                row.user_email.as_deref().unwrap_or(""),
            ])
            .map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}
