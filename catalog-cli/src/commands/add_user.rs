//! Add-user command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use catalog::User;
use clap::Args;

/// Register a borrower.
#[derive(Args)]
pub struct AddUserCommand {
    /// User identifier
    #[arg(value_name = "USER_ID")]
    pub user_id: String,

    /// Display name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Contact email
    #[arg(long, default_value = "")]
    pub email: String,
}

impl AddUserCommand {
    /// Execute the add-user command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let user = User::new(self.user_id, self.name, self.email);

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        db.add_user(&user).map_err(CliError::from)?;

        if !global.quiet {
            eprintln!("Added user {}", user.id);
        }

        Ok(())
    }
}
