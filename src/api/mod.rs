//! Command surface: the named operations the storage engine exposes to a
//! presentation layer.
//!
//! Each operation has a typed request/response shape; transport is out of
//! scope. [`Surface`] is the dispatch point: it owns the repositories and
//! maps every [`Request`] onto exactly one storage call with no additional
//! logic.

use crate::db::db::Db;
use crate::db::folders::Folders;
use crate::db::tasks::Tasks;
use crate::libs::folder::Folder;
use crate::libs::task::{NewTask, Task, TaskCounts, TaskFilter, TaskUpdate, UpdateOutcome};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named operation with its input payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request {
    GetTasks {
        #[serde(default)]
        filter: TaskFilter,
    },
    CreateTask {
        task: NewTask,
    },
    UpdateTask {
        id: i64,
        updates: TaskUpdate,
    },
    DeleteTask {
        id: i64,
    },
    GetFolders,
    CreateFolder {
        name: String,
        #[serde(default)]
        icon: Option<String>,
    },
    DeleteFolder {
        id: i64,
    },
    GetCounts,
}

/// Operation result payloads.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Response {
    Tasks { tasks: Vec<Task> },
    Task { task: Task },
    Folders { folders: Vec<Folder> },
    Folder { folder: Folder },
    Success { success: bool },
    Counts { counts: TaskCounts },
}

/// The storage engine behind its operation surface.
pub struct Surface {
    folders: Folders,
    tasks: Tasks,
}

impl Surface {
    /// Opens the surface against the default database location.
    pub fn new() -> Result<Self> {
        Ok(Self {
            folders: Folders::new()?,
            tasks: Tasks::new()?,
        })
    }

    /// Opens the surface against an explicit database path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            folders: Folders::with_db(Db::open(&path)?),
            tasks: Tasks::with_db(Db::open(&path)?),
        })
    }

    pub fn get_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        self.tasks.fetch(filter)
    }

    pub fn create_task(&self, task: &NewTask) -> Result<Task> {
        self.tasks.create(task)
    }

    pub fn update_task(&self, id: i64, updates: &TaskUpdate) -> Result<UpdateOutcome> {
        self.tasks.update(id, updates)
    }

    pub fn delete_task(&self, id: i64) -> Result<bool> {
        self.tasks.delete(id)
    }

    pub fn get_folders(&self) -> Result<Vec<Folder>> {
        self.folders.list()
    }

    pub fn create_folder(&self, name: &str, icon: Option<&str>) -> Result<Folder> {
        self.folders.create(name, icon)
    }

    pub fn delete_folder(&self, id: i64) -> Result<bool> {
        self.folders.delete(id)
    }

    pub fn get_counts(&self) -> Result<TaskCounts> {
        self.tasks.counts()
    }

    /// Dispatches a request to its storage operation.
    ///
    /// `updateTask` reports success only when a row was actually modified;
    /// both "id not found" and "nothing to update" come back as `false`.
    pub fn handle(&self, request: Request) -> Result<Response> {
        let response = match request {
            Request::GetTasks { filter } => Response::Tasks {
                tasks: self.get_tasks(&filter)?,
            },
            Request::CreateTask { task } => Response::Task {
                task: self.create_task(&task)?,
            },
            Request::UpdateTask { id, updates } => Response::Success {
                success: self.update_task(id, &updates)? == UpdateOutcome::Updated,
            },
            Request::DeleteTask { id } => Response::Success {
                success: self.delete_task(id)?,
            },
            Request::GetFolders => Response::Folders {
                folders: self.get_folders()?,
            },
            Request::CreateFolder { name, icon } => Response::Folder {
                folder: self.create_folder(&name, icon.as_deref())?,
            },
            Request::DeleteFolder { id } => Response::Success {
                success: self.delete_folder(id)?,
            },
            Request::GetCounts => Response::Counts {
                counts: self.get_counts()?,
            },
        };
        Ok(response)
    }
}
