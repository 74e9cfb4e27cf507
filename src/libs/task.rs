//! Task domain model: the stored record, creation and update payloads, and
//! the typed filter the storage engine builds queries from.
//!
//! The filter and update types replace the loosely-typed field bags of an
//! earlier design: every accepted field is declared here, unknown keys are
//! rejected during deserialization, and partial updates distinguish "field
//! absent" from "field set to NULL" via `Option<Option<T>>`.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Deserializer, Serialize};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(FromSqlError::Other(
                format!("unknown task status: {}", other).into(),
            )),
        }
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(FromSqlError::Other(
                format!("unknown priority: {}", other).into(),
            )),
        }
    }
}

/// Relative due-date window, computed against the local calendar date at
/// query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// Due strictly after today. Never matches today itself or tasks
    /// without a due date.
    Upcoming,
}

/// A stored task as read back from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub folder_id: Option<i64>,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// Payload for creating a task.
///
/// Carries exactly the caller-settable fields: id, status, completedAt and
/// createdAt are assigned by the engine (status always starts `pending`).
/// Unknown fields in a wire payload are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub folder_id: Option<i64>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        NewTask {
            title: title.to_string(),
            description: None,
            due_date: None,
            priority: None,
            folder_id: None,
        }
    }
}

/// Conjunctive task filter. Every present field adds an AND predicate.
///
/// `due_date` and `date_range` are mutually exclusive in effect: an exact
/// `due_date` match takes precedence when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub folder_id: Option<i64>,
    pub due_date: Option<NaiveDate>,
    pub date_range: Option<DateRange>,
}

impl TaskFilter {
    pub fn by_status(status: TaskStatus) -> Self {
        TaskFilter {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn by_folder(folder_id: i64) -> Self {
        TaskFilter {
            folder_id: Some(folder_id),
            ..Default::default()
        }
    }

    pub fn due_on(date: NaiveDate) -> Self {
        TaskFilter {
            due_date: Some(date),
            ..Default::default()
        }
    }

    pub fn upcoming() -> Self {
        TaskFilter {
            date_range: Some(DateRange::Upcoming),
            ..Default::default()
        }
    }
}

/// Deserializes a present-but-possibly-null field into `Some(Option<T>)`,
/// leaving absent fields as `None` via `#[serde(default)]`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Partial task update. Only present fields are written.
///
/// Nullable columns use two `Option` layers: the outer one is presence
/// (was the field in the payload at all), the inner one is the stored
/// value (`None` writes NULL).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    #[serde(deserialize_with = "double_option")]
    pub folder_id: Option<Option<i64>>,
    #[serde(deserialize_with = "double_option")]
    pub completed_at: Option<Option<NaiveDateTime>>,
}

impl TaskUpdate {
    /// True when no field is present at all; such an update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.folder_id.is_none()
            && self.completed_at.is_none()
    }
}

/// Result of a partial update attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A row was modified.
    Updated,
    /// No row with the given id exists.
    NotFound,
    /// The update payload contained no fields; storage was not touched.
    NoFields,
}

/// Dashboard counts computed against today's local date.
///
/// `today` and `upcoming` are subsets of `pending`, not a partition of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub pending: i64,
    pub today: i64,
    pub upcoming: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_detected() {
        assert!(TaskUpdate::default().is_empty());

        let update = TaskUpdate {
            title: Some("Report".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let update: TaskUpdate = serde_json::from_str(r#"{"dueDate": null}"#).unwrap();
        assert_eq!(update.due_date, Some(None));
        assert!(update.folder_id.is_none());

        let update: TaskUpdate = serde_json::from_str(r#"{"dueDate": "2099-01-01"}"#).unwrap();
        assert_eq!(
            update.due_date,
            Some(Some(NaiveDate::from_ymd_opt(2099, 1, 1).unwrap()))
        );
    }

    #[test]
    fn unknown_update_fields_are_rejected() {
        let result: Result<TaskUpdate, _> = serde_json::from_str(r#"{"createdAt": "now"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_filter_fields_are_rejected() {
        let result: Result<TaskFilter, _> = serde_json::from_str(r#"{"owner": "me"}"#);
        assert!(result.is_err());

        let result: Result<TaskFilter, _> = serde_json::from_str(r#"{"dateRange": "someday"}"#);
        assert!(result.is_err());
    }
}
