//! Database layer for the taskdeck application.
//!
//! A persistence layer built on SQLite: idempotent schema creation, folder
//! and task repositories, dynamic filter construction and aggregate counts.
//! Connections run in WAL mode with foreign keys enabled, so readers are
//! never blocked by a writer and folder deletion cascades to tasks as a
//! single atomic statement.

/// Core database connection and schema initialization.
pub mod db;

/// Folder CRUD operations with cascade delete.
pub mod folders;

/// Task CRUD, filtering, partial updates and counts.
pub mod tasks;
