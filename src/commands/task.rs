use crate::api::Surface;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Priority, TaskFilter, TaskStatus, TaskUpdate, UpdateOutcome};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Priority level
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        /// Folder id to file the task under
        #[arg(short, long)]
        folder: Option<i64>,
    },
    /// List tasks, optionally filtered
    List {
        /// Only tasks with this status
        #[arg(long, value_enum)]
        status: Option<TaskStatus>,
        /// Only tasks in this folder
        #[arg(long)]
        folder: Option<i64>,
        /// Only tasks due exactly on this date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Only tasks due strictly after today
        #[arg(long)]
        upcoming: bool,
    },
    /// Edit task fields
    Edit {
        /// Task id
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        /// Move to another folder
        #[arg(short, long)]
        folder: Option<i64>,
    },
    /// Mark a task as completed
    Done {
        /// Task id
        id: i64,
    },
    /// Revert a completed task to pending
    Reopen {
        /// Task id
        id: i64,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: i64,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let surface = Surface::new()?;

    match args.command {
        TaskCommand::Add {
            title,
            description,
            due,
            priority,
            folder,
        } => {
            let task = surface.create_task(&NewTask {
                title,
                description,
                due_date: due,
                priority,
                folder_id: folder,
            })?;
            msg_success!(Message::TaskCreated(task.title));
        }
        TaskCommand::List {
            status,
            folder,
            due,
            upcoming,
        } => {
            let filter = TaskFilter {
                status,
                folder_id: folder,
                due_date: due,
                date_range: upcoming.then_some(crate::libs::task::DateRange::Upcoming),
            };
            let tasks = surface.get_tasks(&filter)?;
            if tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
                return Ok(());
            }
            msg_print!(Message::TasksHeader, true);
            View::tasks(&tasks);
        }
        TaskCommand::Edit {
            id,
            title,
            description,
            due,
            priority,
            folder,
        } => {
            let updates = TaskUpdate {
                title,
                description: description.map(Some),
                due_date: due.map(Some),
                priority,
                folder_id: folder.map(Some),
                ..Default::default()
            };
            report_update(id, surface.update_task(id, &updates)?, Message::TaskUpdated(id));
        }
        TaskCommand::Done { id } => {
            let updates = TaskUpdate {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            };
            report_update(id, surface.update_task(id, &updates)?, Message::TaskCompleted(id));
        }
        TaskCommand::Reopen { id } => {
            let updates = TaskUpdate {
                status: Some(TaskStatus::Pending),
                ..Default::default()
            };
            report_update(id, surface.update_task(id, &updates)?, Message::TaskReopened(id));
        }
        TaskCommand::Delete { id } => {
            if surface.delete_task(id)? {
                msg_success!(Message::TaskDeleted(id));
            } else {
                msg_error!(Message::TaskNotFound(id));
            }
        }
    }

    Ok(())
}

fn report_update(id: i64, outcome: UpdateOutcome, done: Message) {
    match outcome {
        UpdateOutcome::Updated => msg_success!(done),
        UpdateOutcome::NotFound => msg_error!(Message::TaskNotFound(id)),
        UpdateOutcome::NoFields => msg_info!(Message::NothingToUpdate),
    }
}
