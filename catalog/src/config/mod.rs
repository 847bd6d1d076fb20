//! Configuration system for catalog.
//!
//! Configuration is merged from the following sources (highest precedence
//! first):
//!
//! 1. Environment variables (`CATALOG_*`)
//! 2. The user config file, `<data dir>/config.yaml`
//! 3. Built-in defaults
//!
//! Command-line flags are applied on top of the result by the front end.
//!
//! # Examples
//!
//! ```no_run
//! use catalog::config::ConfigLoader;
//!
//! let config = ConfigLoader::load(None).unwrap();
//! println!("date format: {}", config.date_format());
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::Config;
