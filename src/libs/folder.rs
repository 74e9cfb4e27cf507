use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};

/// Default display icon assigned to folders created without one.
pub const DEFAULT_FOLDER_ICON: &str = "folder";

/// Distinguishes built-in folders from user-created ones.
///
/// `System` is reserved for future built-in folders (an Inbox equivalent);
/// every folder created through the current API is `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderKind {
    System,
    Custom,
}

impl FolderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderKind::System => "system",
            FolderKind::Custom => "custom",
        }
    }
}

impl ToSql for FolderKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for FolderKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "system" => Ok(FolderKind::System),
            "custom" => Ok(FolderKind::Custom),
            other => Err(FromSqlError::Other(
                format!("unknown folder type: {}", other).into(),
            )),
        }
    }
}

/// A named grouping for tasks.
///
/// Tasks reference folders through a nullable foreign key; a task without a
/// folder is "unfiled". Deleting a folder cascades to its tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FolderKind,
    pub icon: String,
    pub created_at: chrono::NaiveDateTime,
}
