use thiserror::Error;

/// Input validation failures raised by the storage engine.
///
/// Not-found outcomes are never errors (they surface as booleans or
/// [`UpdateOutcome`](crate::libs::task::UpdateOutcome)); this enum covers
/// payloads the engine refuses to persist at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Folder name must not be empty")]
    EmptyFolderName,
    #[error("Task title must not be empty")]
    EmptyTaskTitle,
}
