/// All user-facing message variants for the taskdeck application.
///
/// Keeping every message in one enum gives a single source of truth for
/// output text and compile-time checking of message parameters; the actual
/// wording lives in the `Display` implementation.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(i64),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskDeleted(i64),
    TaskNotFound(i64),
    TasksHeader,
    NoTasksFound,
    NothingToUpdate,

    // === FOLDER MESSAGES ===
    FolderCreated(String),
    FolderDeleted(i64),
    FolderNotFound(i64),
    FoldersHeader,
    NoFoldersFound,
    ConfirmDeleteFolder(String),
    FolderDeleteCancelled,

    // === COUNTS MESSAGES ===
    CountsHeader,
}
