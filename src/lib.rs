//! # Taskdeck - personal task manager
//!
//! A command-line task manager backed by a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete and delete tasks
//! - **Folders**: Group tasks into folders with cascade delete
//! - **Filtering**: By status, folder, exact due date or the upcoming window
//! - **Dashboard Counts**: Pending, due-today and upcoming totals
//! - **Command Surface**: Typed request/response operations for front ends
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
