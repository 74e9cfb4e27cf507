//! Display implementation for taskdeck application messages.
//!
//! Converts structured [`Message`] values into the human-readable text shown
//! in the terminal. All user-facing wording is defined here and nowhere else.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskReopened(id) => format!("Task {} reopened", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NothingToUpdate => "Nothing to update".to_string(),

            // === FOLDER MESSAGES ===
            Message::FolderCreated(name) => format!("Folder '{}' created", name),
            Message::FolderDeleted(id) => format!("Folder {} and its tasks deleted", id),
            Message::FolderNotFound(id) => format!("Folder {} not found", id),
            Message::FoldersHeader => "🗂  Folders".to_string(),
            Message::NoFoldersFound => "No folders found".to_string(),
            Message::ConfirmDeleteFolder(name) => {
                format!("Delete folder '{}' and all tasks in it?", name)
            }
            Message::FolderDeleteCancelled => "Folder deletion cancelled".to_string(),

            // === COUNTS MESSAGES ===
            Message::CountsHeader => "📊 Task summary".to_string(),
        };
        write!(f, "{}", text)
    }
}
