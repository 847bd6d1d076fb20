//! Build script for catalog-cli.
//!
//! Generates the `catalog.1` man page at build time using clap_mangen and
//! places it in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("catalog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage a library catalog of books and reservations")
        .long_about(
            "Command-line tool for recording books, borrowers and reservations in a local SQLite catalog",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("CATALOG_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("CATALOG_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("CATALOG_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("add")
                .about("Add a new book")
                .long_about("Add a book with the given id; it starts out available"),
            Command::new("show")
                .about("Show a book's details")
                .long_about("Show a book together with its reservation and borrower, if any"),
            Command::new("search")
                .about("Search reservations")
                .long_about(
                    "Find reservations by exact book id, title substring, exact user id or reservation id",
                ),
            Command::new("list")
                .about("List all books")
                .long_about("Display every book with its reservation in various formats"),
            Command::new("update")
                .about("Update a book's details")
                .long_about("Change the title, author or ISBN of a book; omitted fields are kept"),
            Command::new("delete")
                .about("Delete a book and its reservations")
                .long_about("Remove a book and every reservation that references it atomically"),
            Command::new("add-user")
                .about("Register a borrower")
                .long_about("Add a user who can hold reservations"),
            Command::new("reserve")
                .about("Reserve a book for a borrower")
                .long_about("Reserve an available book and print the new reservation id"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(std::io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("catalog.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
