//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reservation::{validate_date_format, DEFAULT_DATE_FORMAT};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use catalog::config::Config;
///
/// let config: Config = serde_yaml::from_str("maximum_lock_wait_seconds: 10").unwrap();
/// assert_eq!(config.maximum_lock_wait_seconds, Some(10));
/// assert_eq!(config.date_format(), "%Y-%m-%d");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How long to wait for the database write lock.
    pub maximum_lock_wait_seconds: Option<u64>,

    /// chrono format for reservations created without a date.
    pub reservation_date_format: Option<String>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Returns the reservation date format, falling back to `%Y-%m-%d`.
    #[must_use]
    pub fn date_format(&self) -> &str {
        self.reservation_date_format
            .as_deref()
            .unwrap_or(DEFAULT_DATE_FORMAT)
    }

    /// Returns the configured lock wait, if any.
    #[must_use]
    pub fn lock_wait(&self) -> Option<Duration> {
        self.maximum_lock_wait_seconds.map(Duration::from_secs)
    }

    /// Overlays every field set in `other` onto `self`.
    pub fn merge(&mut self, other: Self) {
        if other.maximum_lock_wait_seconds.is_some() {
            self.maximum_lock_wait_seconds = other.maximum_lock_wait_seconds;
        }
        if other.reservation_date_format.is_some() {
            self.reservation_date_format = other.reservation_date_format;
        }
        if other.disable_autoinit.is_some() {
            self.disable_autoinit = other.disable_autoinit;
        }
    }

    /// Checks the configuration for unusable values.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero lock wait or a blank or
    /// malformed date format.
    pub fn validate(&self) -> Result<()> {
        if self.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "must be greater than zero".into(),
            });
        }
        if matches!(self.reservation_date_format.as_deref(), Some(f) if f.trim().is_empty()) {
            return Err(Error::Validation {
                field: "reservation_date_format".into(),
                message: "must be non-empty".into(),
            });
        }
        if let Some(format) = &self.reservation_date_format {
            validate_date_format(format)?;
        }
        Ok(())
    }
}
