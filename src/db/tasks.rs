//! Task storage operations: creation, dynamic filtering, partial updates
//! with status-driven field derivation, and dashboard counts.

use crate::db::db::Db;
use crate::libs::error::ValidationError;
use crate::libs::task::{
    DateRange, NewTask, Priority, Task, TaskCounts, TaskFilter, TaskStatus, TaskUpdate,
    UpdateOutcome,
};
use anyhow::{Context, Result};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use chrono::{Local, NaiveDate, NaiveDateTime};

const SELECT_TASKS: &str =
    "SELECT id, title, description, dueDate, priority, status, folderId, completedAt, createdAt FROM tasks";
// Unscheduled tasks sort last; newest first among equal due dates.
const ORDER_TASKS: &str = " ORDER BY dueDate IS NULL, dueDate ASC, createdAt DESC";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, dueDate, priority, status, folderId, createdAt)
    VALUES (?1, ?2, ?3, ?4, 'pending', ?5, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_PENDING: &str = "SELECT COUNT(*) FROM tasks WHERE status = 'pending'";
const COUNT_DUE_TODAY: &str = "SELECT COUNT(*) FROM tasks WHERE status = 'pending' AND dueDate = ?1";
const COUNT_UPCOMING: &str = "SELECT COUNT(*) FROM tasks WHERE status = 'pending' AND dueDate > ?1";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Task repository.
pub struct Tasks {
    db: Db,
}

impl Tasks {
    /// Opens the repository against the default database location.
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    /// Wraps an explicitly constructed database handle.
    pub fn with_db(db: Db) -> Self {
        Self { db }
    }

    /// Inserts a task and returns it with its assigned id.
    ///
    /// Status always starts as `pending`; the insert statement hardcodes it
    /// so no caller-supplied value can leak through.
    pub fn create(&self, task: &NewTask) -> Result<Task> {
        if task.title.trim().is_empty() {
            return Err(ValidationError::EmptyTaskTitle.into());
        }
        let priority = task.priority.unwrap_or(Priority::Medium);
        self.db.conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.description,
                task.due_date,
                priority,
                task.folder_id
            ],
        )?;
        let id = self.db.conn.last_insert_rowid();
        self.get_by_id(id)?
            .context("task row missing right after insert")
    }

    /// Fetches tasks matching the filter, AND-ing every present predicate.
    ///
    /// An exact `due_date` takes precedence over `date_range`; the upcoming
    /// window compares against today's local date computed here, at query
    /// time.
    pub fn fetch(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(status) = filter.status {
            clauses.push("status = ?");
            params.push(Value::from(status.as_str().to_string()));
        }
        if let Some(folder_id) = filter.folder_id {
            clauses.push("folderId = ?");
            params.push(Value::from(folder_id));
        }
        if let Some(due_date) = filter.due_date {
            clauses.push("dueDate = ?");
            params.push(Value::from(due_date.format(DATE_FORMAT).to_string()));
        } else if filter.date_range == Some(DateRange::Upcoming) {
            let today = Local::now().date_naive();
            clauses.push("dueDate > ?");
            params.push(Value::from(today.format(DATE_FORMAT).to_string()));
        }

        let mut sql = String::from(SELECT_TASKS);
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(ORDER_TASKS);

        let mut stmt = self.db.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(params), Self::map_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.db
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASKS), params![id], Self::map_task)
            .optional()
            .map_err(Into::into)
    }

    /// Applies a partial update; only present fields are written.
    ///
    /// Transitioning to `completed` stamps `completedAt` with the current
    /// time unless the caller supplied a non-null value; reverting to
    /// `pending` always clears it. An empty payload never touches storage.
    pub fn update(&self, id: i64, updates: &TaskUpdate) -> Result<UpdateOutcome> {
        if updates.is_empty() {
            return Ok(UpdateOutcome::NoFields);
        }

        let mut effective = updates.clone();
        match effective.status {
            // An explicit null counts as "not specified": a completed task
            // always carries a completion timestamp
            Some(TaskStatus::Completed)
                if matches!(effective.completed_at, None | Some(None)) =>
            {
                effective.completed_at = Some(Some(Local::now().naive_local()));
            }
            Some(TaskStatus::Pending) => {
                effective.completed_at = Some(None);
            }
            _ => {}
        }

        let mut sets: Vec<&str> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(title) = &effective.title {
            sets.push("title = ?");
            params.push(Value::from(title.clone()));
        }
        if let Some(description) = &effective.description {
            sets.push("description = ?");
            params.push(Value::from(description.clone()));
        }
        if let Some(due_date) = &effective.due_date {
            sets.push("dueDate = ?");
            params.push(Self::date_value(*due_date));
        }
        if let Some(priority) = effective.priority {
            sets.push("priority = ?");
            params.push(Value::from(priority.as_str().to_string()));
        }
        if let Some(status) = effective.status {
            sets.push("status = ?");
            params.push(Value::from(status.as_str().to_string()));
        }
        if let Some(folder_id) = &effective.folder_id {
            sets.push("folderId = ?");
            params.push(Value::from(*folder_id));
        }
        if let Some(completed_at) = &effective.completed_at {
            sets.push("completedAt = ?");
            params.push(Self::datetime_value(*completed_at));
        }

        let sql = format!("UPDATE tasks SET {} WHERE id = ?", sets.join(", "));
        params.push(Value::from(id));

        let affected = self.db.conn.execute(&sql, params_from_iter(params))?;
        if affected > 0 {
            Ok(UpdateOutcome::Updated)
        } else {
            Ok(UpdateOutcome::NotFound)
        }
    }

    /// Deletes a task; false means the id did not exist.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.db.conn.execute(DELETE_TASK, params![id])?;
        Ok(affected > 0)
    }

    /// Dashboard counts against today's local date.
    pub fn counts(&self) -> Result<TaskCounts> {
        let today = Local::now().date_naive().format(DATE_FORMAT).to_string();

        let pending = self
            .db
            .conn
            .query_row(COUNT_PENDING, [], |row| row.get(0))?;
        let today_count = self
            .db
            .conn
            .query_row(COUNT_DUE_TODAY, params![today], |row| row.get(0))?;
        let upcoming = self
            .db
            .conn
            .query_row(COUNT_UPCOMING, params![today], |row| row.get(0))?;

        Ok(TaskCounts {
            pending,
            today: today_count,
            upcoming,
        })
    }

    fn date_value(date: Option<NaiveDate>) -> Value {
        match date {
            Some(d) => Value::from(d.format(DATE_FORMAT).to_string()),
            None => Value::Null,
        }
    }

    fn datetime_value(ts: Option<NaiveDateTime>) -> Value {
        match ts {
            Some(t) => Value::from(t.format(DATETIME_FORMAT).to_string()),
            None => Value::Null,
        }
    }

    fn map_task(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            due_date: row.get(3)?,
            priority: row.get(4)?,
            status: row.get(5)?,
            folder_id: row.get(6)?,
            completed_at: row.get(7)?,
            created_at: row.get(8)?,
        })
    }
}
