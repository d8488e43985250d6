// CSV export of task lists

use crate::error::StoreResult;
use crate::store::{date_to_db, timestamp_to_db};
use crate::task::Task;
use serde::Serialize;
use std::path::Path;

/// Header row, in column order
pub const CSV_COLUMNS: [&str; 7] = [
    "id",
    "title",
    "description",
    "due_date",
    "priority",
    "completed",
    "created_at",
];

/// One exported line; dates are pre-formatted so the file layout does not
/// depend on serde defaults
#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    title: &'a str,
    description: &'a str,
    due_date: String,
    priority: &'static str,
    completed: bool,
    created_at: String,
}

impl<'a> From<&'a Task> for CsvRow<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            id: task.id.0,
            title: &task.title,
            description: task.description.as_deref().unwrap_or_default(),
            due_date: task.due_date.map(date_to_db).unwrap_or_default(),
            priority: task.priority.as_str(),
            completed: task.completed,
            created_at: timestamp_to_db(&task.created_at),
        }
    }
}

/// Write tasks to `path`, truncating any existing file
///
/// The header row is always written, even for an empty task list.
pub fn write_csv(path: &Path, tasks: &[Task]) -> StoreResult<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(CSV_COLUMNS)?;
    for task in tasks {
        writer.serialize(CsvRow::from(task))?;
    }
    writer.flush()?;

    Ok(())
}
