//! Environment variable handling for configuration overrides.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Environment variable overriding `maximum_lock_wait_seconds`.
pub const LOCK_WAIT_ENV: &str = "CATALOG_MAXIMUM_LOCK_WAIT_SECONDS";

/// Environment variable overriding `reservation_date_format`.
pub const DATE_FORMAT_ENV: &str = "CATALOG_RESERVATION_DATE_FORMAT";

/// Environment variable overriding `disable_autoinit`.
pub const DISABLE_AUTOINIT_ENV: &str = "CATALOG_DISABLE_AUTOINIT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use catalog::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `CATALOG_*` environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(seconds) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: LOCK_WAIT_ENV.into(),
                    message: "Must be a non-negative integer".into(),
                })?);
        }

        if let Ok(format) = env::var(DATE_FORMAT_ENV) {
            config.reservation_date_format = Some(format);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
