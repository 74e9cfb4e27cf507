use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskdeck.db";

/// Idempotent schema. `IF NOT EXISTS` keeps opening an existing database a
/// no-op; there is no versioned migration scheme, schema changes must stay
/// additive.
const SCHEMA_FOLDERS: &str = "CREATE TABLE IF NOT EXISTS folders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    type TEXT NOT NULL DEFAULT 'custom',
    icon TEXT NOT NULL DEFAULT 'folder',
    createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
);";
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    dueDate TEXT,
    priority TEXT NOT NULL DEFAULT 'medium',
    status TEXT NOT NULL DEFAULT 'pending',
    folderId INTEGER,
    completedAt DATETIME,
    createdAt DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (folderId) REFERENCES folders(id) ON DELETE CASCADE
);";

/// An open database handle.
///
/// Explicitly constructed and passed to the repositories, so tests can point
/// each fixture at its own ephemeral file. WAL mode keeps readers unblocked
/// while a write is in flight; foreign keys are enabled per connection so
/// folder deletion cascades to tasks atomically.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the default per-user data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens (creating if absent) the database at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        // folders first, tasks reference it
        conn.execute(SCHEMA_FOLDERS, [])?;
        conn.execute(SCHEMA_TASKS, [])?;
        Ok(Db { conn })
    }
}
