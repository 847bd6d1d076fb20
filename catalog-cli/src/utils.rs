//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management and output helpers.

use crate::error::CliError;
use catalog::database::{default_data_dir, DATABASE_FILE_NAME};
use catalog::{Config, ConfigLoader, Database, DatabaseConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load configuration.
///
/// Sources, in order of precedence:
/// 1. Global options (applied in `open_database`)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigLoader::load(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options.
pub fn resolve_database_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join(DATABASE_FILE_NAME));
    }

    let data_dir = default_data_dir().map_err(|e| CliError::Config(e.to_string()))?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}

/// Open the catalog with configuration applied.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global)?;

    let autoinit_disabled = global.disable_autoinit || config.disable_autoinit == Some(true);
    if !db_path.exists() && autoinit_disabled {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(&db_path);

    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout) = config.lock_wait() {
        db_config = db_config.with_busy_timeout(timeout);
    }

    log::debug!("opening catalog at {}", db_path.display());
    let db = Database::open(db_config).map_err(CliError::from)?;
    Ok(db.with_date_format(config.date_format()))
}

/// Render an optional column for table output.
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Convert serde_json::Error to CliError.
pub fn json_error(e: serde_json::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Convert csv::Error to CliError.
pub fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}
