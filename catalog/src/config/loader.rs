//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the user configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration from the data directory and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Builds the effective configuration.
    ///
    /// Reads `<data_dir>/config.yaml` when it exists (the default data
    /// directory when `data_dir` is `None`), then applies environment
    /// overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an environment
    /// variable is malformed, or the merged configuration is invalid.
    pub fn load(data_dir: Option<&Path>) -> Result<Config> {
        let mut config = Config::default();

        let path = Self::config_path(data_dir)?;
        if path.exists() {
            log::debug!("loading configuration from {}", path.display());
            config.merge(Self::load_file(&path)?);
        }

        EnvironmentConfig::apply_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Path of the user config file for a data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `data_dir` is `None` and the home directory
    /// cannot be determined.
    pub fn config_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => crate::database::default_data_dir()?,
        };
        Ok(dir.join(CONFIG_FILE_NAME))
    }
}
