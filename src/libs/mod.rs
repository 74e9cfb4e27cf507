/// Per-user data directory resolution.
pub mod data_storage;

/// Typed validation errors raised by the storage engine.
pub mod error;

/// Folder domain model.
pub mod folder;

/// User-facing message catalog and output macros.
pub mod messages;

/// Task domain model, filters and partial updates.
pub mod task;

/// Terminal table rendering.
pub mod view;
