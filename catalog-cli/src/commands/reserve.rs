//! Reserve command implementation.
//!
//! Prints the new reservation id to stdout so scripts can capture it.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use catalog::ReservationRequest;
use clap::Args;

/// Reserve a book for a borrower.
#[derive(Args)]
pub struct ReserveCommand {
    /// Book identifier
    #[arg(value_name = "BOOK_ID")]
    pub book_id: String,

    /// User identifier
    #[arg(value_name = "USER_ID")]
    pub user_id: String,

    /// Reservation date (default: today, in the configured format)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut request = ReservationRequest::new(self.book_id, self.user_id);
        if let Some(date) = self.date {
            request = request.with_date(date);
        }

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let reservation = db.reserve_book(&request).map_err(CliError::from)?;

        println!("{}", reservation.id);
        if global.verbose {
            eprintln!(
                "Reserved book {} for user {} on {}",
                reservation.book_id, reservation.user_id, reservation.date
            );
        }

        Ok(())
    }
}
