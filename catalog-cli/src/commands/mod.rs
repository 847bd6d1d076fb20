//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `add`: Add a new book
//! - `show`: Show a book's details
//! - `search`: Search reservations
//! - `list`: List all books
//! - `update`: Update a book's details
//! - `delete`: Delete a book and its reservations
//! - `add_user`: Register a borrower
//! - `reserve`: Reserve a book for a borrower

pub mod add;
pub mod add_user;
pub mod delete;
pub mod list;
pub mod reserve;
pub mod search;
pub mod show;
pub mod update;

pub use add::AddCommand;
pub use add_user::AddUserCommand;
pub use delete::DeleteCommand;
pub use list::ListCommand;
pub use reserve::ReserveCommand;
pub use search::SearchCommand;
pub use show::ShowCommand;
pub use update::UpdateCommand;
