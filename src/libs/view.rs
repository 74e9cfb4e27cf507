use super::folder::Folder;
use super::task::{Task, TaskCounts};
use prettytable::{row, Table};

/// Terminal table rendering for lists and counts.
pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE", "PRIORITY", "STATUS", "FOLDER"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.due_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string()),
                task.priority.as_str(),
                task.status.as_str(),
                task.folder_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "inbox".to_string()),
            ]);
        }
        table.printstd();
    }

    pub fn folders(folders: &[Folder]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "TYPE", "ICON", "CREATED"]);
        for folder in folders {
            table.add_row(row![
                folder.id,
                folder.name,
                folder.kind.as_str(),
                folder.icon,
                folder.created_at.format("%Y-%m-%d %H:%M:%S"),
            ]);
        }
        table.printstd();
    }

    pub fn counts(counts: &TaskCounts) {
        let mut table = Table::new();

        table.add_row(row!["PENDING", "TODAY", "UPCOMING"]);
        table.add_row(row![counts.pending, counts.today, counts.upcoming]);
        table.printstd();
    }
}
