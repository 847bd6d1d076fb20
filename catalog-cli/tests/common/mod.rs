//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Fixtures for books, users and reservations

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test run.
const ISOLATED_ENV: [&str; 7] = [
    "CATALOG_DATA_DIR",
    "CATALOG_BUSY_TIMEOUT",
    "CATALOG_DISABLE_AUTOINIT",
    "CATALOG_OUTPUT_FORMAT",
    "CATALOG_LOG_MODE",
    "CATALOG_MAXIMUM_LOCK_WAIT_SECONDS",
    "CATALOG_RESERVATION_DATE_FORMAT",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the catalog data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the CLI creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("catalog-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder without a data directory.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("catalog").expect("Failed to find catalog binary");
        for var in ISOLATED_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the catalog database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("library.db")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Add a book, asserting success.
    pub fn add_book(&self, id: &str, title: &str, author: &str, isbn: &str) {
        self.command()
            .args(["add", id, "--title", title, "--author", author, "--isbn", isbn])
            .assert()
            .success();
    }

    /// Add a user, asserting success.
    pub fn add_user(&self, id: &str, name: &str, email: &str) {
        self.command()
            .args(["add-user", id, "--name", name, "--email", email])
            .assert()
            .success();
    }

    /// Reserve a book on a fixed date and return the reservation id.
    pub fn reserve(&self, book_id: &str, user_id: &str) -> i64 {
        let output = self
            .command()
            .args(["reserve", book_id, user_id, "--date", "2024-03-01"])
            .output()
            .expect("Failed to run reserve command");

        assert!(
            output.status.success(),
            "Reserve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout
            .trim()
            .parse()
            .expect("Output is not a valid reservation id")
    }

    /// Run a command and return its stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");

        assert!(
            output.status.success(),
            "Command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
