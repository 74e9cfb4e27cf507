use crate::db::db::Db;
use crate::libs::error::ValidationError;
use crate::libs::folder::{Folder, FolderKind, DEFAULT_FOLDER_ICON};
use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension, Row};

const INSERT_FOLDER: &str =
    "INSERT INTO folders (name, type, icon, createdAt) VALUES (?1, ?2, ?3, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const SELECT_FOLDERS: &str =
    "SELECT id, name, type, icon, createdAt FROM folders ORDER BY createdAt ASC, id ASC";
const SELECT_FOLDER_BY_ID: &str = "SELECT id, name, type, icon, createdAt FROM folders WHERE id = ?1";
const DELETE_FOLDER: &str = "DELETE FROM folders WHERE id = ?1";

/// Folder repository.
pub struct Folders {
    db: Db,
}

impl Folders {
    /// Opens the repository against the default database location.
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    /// Wraps an explicitly constructed database handle.
    pub fn with_db(db: Db) -> Self {
        Self { db }
    }

    /// Creates a custom folder and returns it with its assigned id.
    pub fn create(&self, name: &str, icon: Option<&str>) -> Result<Folder> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyFolderName.into());
        }
        let icon = icon.unwrap_or(DEFAULT_FOLDER_ICON);
        self.db
            .conn
            .execute(INSERT_FOLDER, params![name, FolderKind::Custom, icon])?;
        let id = self.db.conn.last_insert_rowid();
        self.get_by_id(id)?
            .context("folder row missing right after insert")
    }

    /// Returns all folders ordered by creation time ascending.
    pub fn list(&self) -> Result<Vec<Folder>> {
        let mut stmt = self.db.conn.prepare(SELECT_FOLDERS)?;
        let folder_iter = stmt.query_map([], Self::map_folder)?;

        let mut folders = Vec::new();
        for folder in folder_iter {
            folders.push(folder?);
        }
        Ok(folders)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Folder>> {
        self.db
            .conn
            .query_row(SELECT_FOLDER_BY_ID, params![id], Self::map_folder)
            .optional()
            .map_err(Into::into)
    }

    /// Deletes a folder, cascading to every task filed under it.
    ///
    /// Returns false when no folder with that id exists; that is a normal
    /// outcome, not an error.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.db.conn.execute(DELETE_FOLDER, params![id])?;
        Ok(affected > 0)
    }

    fn map_folder(row: &Row) -> rusqlite::Result<Folder> {
        Ok(Folder {
            id: row.get(0)?,
            name: row.get(1)?,
            kind: row.get(2)?,
            icon: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
