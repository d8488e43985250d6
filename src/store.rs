// Task store implementation on top of SQLite

use crate::error::{StoreError, StoreResult};
use crate::export;
use crate::filter::TaskFilter;
use crate::task::{NewTask, Priority, Task, TaskId, TaskUpdate, now_utc};
use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const TASK_COLUMNS: &str = "id, title, description, due_date, priority, completed, created_at";

// Years that format as four-digit `YYYY-MM-DD`, which keeps text order equal to date order
const MIN_DUE_YEAR: i32 = 0;
const MAX_DUE_YEAR: i32 = 9999;

/// Persistent task store backed by a single SQLite table
///
/// The connection is opened once and held for the lifetime of the store.
pub struct Store {
    path: Option<PathBuf>,
    db: Connection,
}

impl Store {
    /// Open or create a store at the given database file
    ///
    /// Missing parent directories are created and the schema is initialized
    /// if absent, so opening an existing file is a no-op beyond connecting.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let db = Connection::open(path)?;
        let store = Self {
            path: Some(path.to_path_buf()),
            db,
        };
        store.create_schema()?;

        info!(path = %path.display(), "Opened task store");
        Ok(store)
    }

    /// Open a throwaway in-memory store
    pub fn open_in_memory() -> StoreResult<Self> {
        let store = Self {
            path: None,
            db: Connection::open_in_memory()?,
        };
        store.create_schema()?;
        Ok(store)
    }

    /// Path of the database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn create_schema(&self) -> StoreResult<()> {
        debug!("Creating database schema");

        self.db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (length(trim(title)) > 0),
                description TEXT,
                due_date TEXT,
                priority INTEGER NOT NULL DEFAULT 2,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed);
            "#,
        )?;

        Ok(())
    }

    // ========================================================================
    // CRUD API
    // ========================================================================

    /// Create a new task, assigning its id and creation time
    pub fn create(&mut self, new: NewTask) -> StoreResult<Task> {
        let title = Self::validate_title(&new.title)?;
        let description = Self::normalize_description(new.description);
        Self::validate_due_date(new.due_date)?;
        let created_at = now_utc();

        self.db.execute(
            "INSERT INTO tasks (title, description, due_date, priority, completed, created_at)
             VALUES (?1, ?2, ?3, ?4, 0, ?5)",
            params![
                title,
                description,
                new.due_date.map(date_to_db),
                new.priority.rank(),
                timestamp_to_db(&created_at),
            ],
        )?;

        let id = TaskId(self.db.last_insert_rowid());
        debug!(%id, title = %title, "create: inserted task");

        Ok(Task {
            id,
            title,
            description,
            due_date: new.due_date,
            priority: new.priority,
            completed: false,
            created_at,
        })
    }

    /// Get a task by id
    pub fn get(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        let row = self.db.query_row(&sql, [id.0], TaskRow::from_row).optional()?;
        row.map(TaskRow::into_task).transpose()
    }

    /// Overwrite the supplied fields of an existing task
    ///
    /// `id` and `created_at` are never touched. A supplied title must be
    /// non-empty.
    pub fn update(&mut self, id: TaskId, mut update: TaskUpdate) -> StoreResult<Task> {
        let mut task = self.require(id)?;

        if let Some(title) = update.title.take() {
            update.title = Some(Self::validate_title(&title)?);
        }
        if let Some(description) = update.description.take() {
            update.description = Some(Self::normalize_description(description));
        }
        if let Some(due_date) = update.due_date {
            Self::validate_due_date(due_date)?;
        }
        update.apply_to(&mut task);

        let changed = self.db.execute(
            "UPDATE tasks
             SET title = ?1, description = ?2, due_date = ?3, priority = ?4, completed = ?5
             WHERE id = ?6",
            params![
                task.title,
                task.description,
                task.due_date.map(date_to_db),
                task.priority.rank(),
                task.completed,
                id.0,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        debug!(%id, "update: task updated");
        Ok(task)
    }

    /// Permanently delete a task
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let changed = self.db.execute("DELETE FROM tasks WHERE id = ?1", [id.0])?;
        if changed == 0 {
            warn!(%id, "delete: no such task");
            return Err(StoreError::NotFound(id));
        }

        debug!(%id, "delete: task removed");
        Ok(())
    }

    /// Mark a task completed or not completed
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> StoreResult<Task> {
        self.update(id, TaskUpdate::default().completed(completed))
    }

    /// Flip the completed flag of a task
    pub fn toggle_completed(&mut self, id: TaskId) -> StoreResult<Task> {
        let changed = self.db.execute(
            "UPDATE tasks SET completed = CASE WHEN completed = 0 THEN 1 ELSE 0 END WHERE id = ?1",
            [id.0],
        )?;
        if changed == 0 {
            warn!(%id, "toggle_completed: no such task");
            return Err(StoreError::NotFound(id));
        }

        self.require(id)
    }

    /// Number of stored tasks
    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self.db.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// List tasks matching a filter, in the filter's sort order
    ///
    /// Status and priority narrow the rows in SQL; every row is then checked
    /// with `TaskFilter::matches`, which also applies the text query so that
    /// case folding covers non-ASCII titles.
    pub fn list(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        let mut query = format!("SELECT {TASK_COLUMNS} FROM tasks");
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<i64> = Vec::new();

        if let Some(clause) = filter.status.to_sql() {
            clauses.push(clause);
        }
        if let Some(priority) = filter.priority {
            clauses.push("priority = ?1");
            params.push(priority.rank());
        }
        if !clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&clauses.join(" AND "));
        }
        query.push_str(" ORDER BY ");
        query.push_str(filter.sort.to_sql());

        let mut stmt = self.db.prepare(&query)?;
        let rows = stmt.query_map(params_from_iter(params), TaskRow::from_row)?;

        let mut results = Vec::new();
        for row_result in rows {
            let task = row_result?.into_task()?;
            if filter.matches(&task) {
                results.push(task);
            }
        }

        debug!(count = results.len(), ?filter, "list: returning tasks");
        Ok(results)
    }

    /// Write the tasks matching `filter` to a CSV file
    ///
    /// Returns the number of task rows written.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P, filter: &TaskFilter) -> StoreResult<usize> {
        let path = path.as_ref();
        let tasks = self.list(filter)?;
        export::write_csv(path, &tasks)?;

        info!(path = %path.display(), count = tasks.len(), "Exported tasks to CSV");
        Ok(tasks.len())
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn require(&self, id: TaskId) -> StoreResult<Task> {
        self.get(id)?.ok_or_else(|| {
            warn!(%id, "no such task");
            StoreError::NotFound(id)
        })
    }

    fn validate_title(title: &str) -> StoreResult<String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(StoreError::validation("Task title cannot be empty"));
        }
        Ok(trimmed.to_string())
    }

    fn validate_due_date(due_date: Option<NaiveDate>) -> StoreResult<()> {
        match due_date {
            Some(date) if !(MIN_DUE_YEAR..=MAX_DUE_YEAR).contains(&date.year()) => Err(StoreError::validation(format!(
                "Due date year {} out of range ({MIN_DUE_YEAR}-{MAX_DUE_YEAR})",
                date.year()
            ))),
            _ => Ok(()),
        }
    }

    fn normalize_description(description: Option<String>) -> Option<String> {
        description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
    }
}

/// Raw column values of one `tasks` row
struct TaskRow {
    id: i64,
    title: String,
    description: Option<String>,
    due_date: Option<String>,
    priority: i64,
    completed: bool,
    created_at: String,
}

impl TaskRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            due_date: row.get(3)?,
            priority: row.get(4)?,
            completed: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn into_task(self) -> StoreResult<Task> {
        let priority = Priority::from_rank(self.priority)
            .ok_or_else(|| StoreError::invalid_data(format!("task {}: priority {}", self.id, self.priority)))?;
        let due_date = self
            .due_date
            .as_deref()
            .map(date_from_db)
            .transpose()
            .map_err(|e| StoreError::invalid_data(format!("task {}: due_date: {e}", self.id)))?;
        let created_at = timestamp_from_db(&self.created_at)
            .map_err(|e| StoreError::invalid_data(format!("task {}: created_at: {e}", self.id)))?;

        Ok(Task {
            id: TaskId(self.id),
            title: self.title,
            description: self.description,
            due_date,
            priority,
            completed: self.completed,
            created_at,
        })
    }
}

pub(crate) fn date_to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn date_from_db(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

pub(crate) fn timestamp_to_db(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn timestamp_from_db(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::filter::{SortOrder, StatusFilter};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shopping_store() -> (Store, Task, Task) {
        let mut store = Store::open_in_memory().unwrap();
        let milk = store
            .create(NewTask::new("Buy milk").priority(Priority::High))
            .unwrap();
        let eggs = store
            .create(NewTask::new("Buy eggs").priority(Priority::Low))
            .unwrap();
        let eggs = store.set_completed(eggs.id, true).unwrap();
        (store, milk, eggs)
    }

    #[test]
    fn test_store_open_creates_file_and_parents() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("nested/dir/todo.db");

        let store = Store::open(&db_path).unwrap();
        assert!(db_path.exists());
        assert_eq!(store.path(), Some(db_path.as_path()));
    }

    #[test]
    fn test_open_is_idempotent_and_persists() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("todo.db");

        let created = {
            let mut store = Store::open(&db_path).unwrap();
            store.create(NewTask::new("Water plants").due_date(date(2026, 5, 1))).unwrap()
        };

        let store = Store::open(&db_path).unwrap();
        let tasks = store.list(&TaskFilter::all()).unwrap();
        assert_eq!(tasks, vec![created]);
    }

    #[test]
    fn test_create_then_list() {
        let mut store = Store::open_in_memory().unwrap();

        let task = store
            .create(
                NewTask::new("Write report")
                    .description("Quarterly numbers")
                    .due_date(date(2026, 11, 2))
                    .priority(Priority::High),
            )
            .unwrap();

        assert!(task.id.0 > 0);
        assert!(!task.completed);

        let tasks = store.list(&TaskFilter::all()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], task);
        assert_eq!(tasks[0].description.as_deref(), Some("Quarterly numbers"));
        assert_eq!(tasks[0].due_date, Some(date(2026, 11, 2)));
    }

    #[test]
    fn test_create_empty_title_fails() {
        let mut store = Store::open_in_memory().unwrap();
        store.create(NewTask::new("Existing")).unwrap();

        let err = store.create(NewTask::new("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = store.create(NewTask::new("   ")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_create_normalizes_blank_description() {
        let mut store = Store::open_in_memory().unwrap();
        let task = store.create(NewTask::new("  Call mom  ").description("  ")).unwrap();

        assert_eq!(task.title, "Call mom");
        assert_eq!(task.description, None);
        assert_eq!(store.get(task.id).unwrap(), Some(task));
    }

    #[test]
    fn test_get_nonexistent() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.get(TaskId(42)).unwrap().is_none());
    }

    #[test]
    fn test_update_supplied_fields_only() {
        let mut store = Store::open_in_memory().unwrap();
        let original = store
            .create(NewTask::new("Draft").description("first pass").due_date(date(2026, 1, 1)))
            .unwrap();

        let updated = store
            .update(original.id, TaskUpdate::default().title("Final").priority(Priority::Low))
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.priority, Priority::Low);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.due_date, original.due_date);

        assert_eq!(store.get(original.id).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_clears_optional_fields() {
        let mut store = Store::open_in_memory().unwrap();
        let task = store
            .create(NewTask::new("Dentist").description("bring card").due_date(date(2026, 2, 3)))
            .unwrap();

        let updated = store
            .update(task.id, TaskUpdate::default().description(None).due_date(None))
            .unwrap();
        assert_eq!(updated.description, None);
        assert_eq!(updated.due_date, None);
    }

    #[test]
    fn test_update_nonexistent_leaves_store_unchanged() {
        let mut store = Store::open_in_memory().unwrap();
        store.create(NewTask::new("Keep me")).unwrap();
        let before = store.list(&TaskFilter::all()).unwrap();

        let err = store.update(TaskId(999), TaskUpdate::default().title("Nope")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(matches!(err, StoreError::NotFound(TaskId(999))));

        assert_eq!(store.list(&TaskFilter::all()).unwrap(), before);
    }

    #[test]
    fn test_update_empty_title_fails() {
        let mut store = Store::open_in_memory().unwrap();
        let task = store.create(NewTask::new("Original")).unwrap();

        let err = store.update(task.id, TaskUpdate::default().title(" ")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(store.get(task.id).unwrap().unwrap().title, "Original");
    }

    #[test]
    fn test_due_date_year_out_of_range() {
        let mut store = Store::open_in_memory().unwrap();

        let err = store
            .create(NewTask::new("far").due_date(date(10000, 1, 1)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(store.count().unwrap(), 0);

        let task = store.create(NewTask::new("near").due_date(date(2026, 1, 1))).unwrap();
        let err = store
            .update(task.id, TaskUpdate::default().due_date(Some(date(-1, 12, 31))))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(store.get(task.id).unwrap().unwrap().due_date, Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_due_order_at_year_bounds() {
        let mut store = Store::open_in_memory().unwrap();
        let near = store.create(NewTask::new("near").due_date(date(2026, 1, 1))).unwrap();
        let last = store.create(NewTask::new("last").due_date(date(9999, 12, 31))).unwrap();
        let first = store.create(NewTask::new("first").due_date(date(0, 1, 1))).unwrap();

        let ids: Vec<TaskId> = store
            .list(&TaskFilter::all().sort(SortOrder::Due))
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![first.id, near.id, last.id]);
    }

    #[test]
    fn test_delete_twice() {
        let mut store = Store::open_in_memory().unwrap();
        let task = store.create(NewTask::new("Temporary")).unwrap();

        store.delete(task.id).unwrap();
        let err = store.delete(task.id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(store.get(task.id).unwrap().is_none());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = Store::open_in_memory().unwrap();
        let first = store.create(NewTask::new("one")).unwrap();
        let second = store.create(NewTask::new("two")).unwrap();

        store.delete(second.id).unwrap();
        let third = store.create(NewTask::new("three")).unwrap();

        assert!(third.id > second.id);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_set_completed_moves_between_filters() {
        let mut store = Store::open_in_memory().unwrap();
        let task = store.create(NewTask::new("Laundry")).unwrap();

        let done = store.set_completed(task.id, true).unwrap();
        assert!(done.completed);

        let incomplete = store
            .list(&TaskFilter::all().status(StatusFilter::Incomplete))
            .unwrap();
        assert!(incomplete.iter().all(|t| t.id != task.id));

        let completed = store.list(&TaskFilter::all().status(StatusFilter::Completed)).unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, task.id);
    }

    #[test]
    fn test_set_completed_nonexistent() {
        let mut store = Store::open_in_memory().unwrap();
        let err = store.set_completed(TaskId(5), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_toggle_completed() {
        let mut store = Store::open_in_memory().unwrap();
        let task = store.create(NewTask::new("Flip")).unwrap();

        assert!(store.toggle_completed(task.id).unwrap().completed);
        assert!(!store.toggle_completed(task.id).unwrap().completed);

        let err = store.toggle_completed(TaskId(77)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_list_filter_composition() {
        let (store, _milk, eggs) = shopping_store();

        let tasks = store
            .list(&TaskFilter::all().query("buy").status(StatusFilter::Completed))
            .unwrap();
        assert_eq!(tasks, vec![eggs]);
    }

    #[test]
    fn test_list_priority_filter() {
        let (store, milk, _eggs) = shopping_store();

        let tasks = store.list(&TaskFilter::all().priority(Priority::High)).unwrap();
        assert_eq!(tasks, vec![milk]);

        let tasks = store.list(&TaskFilter::all().priority(Priority::Medium)).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_list_query_matches_description_case_insensitively() {
        let mut store = Store::open_in_memory().unwrap();
        let task = store
            .create(NewTask::new("Groceries").description("Ölive oil and BREAD"))
            .unwrap();
        store.create(NewTask::new("Gym")).unwrap();

        assert_eq!(store.list(&TaskFilter::all().query("bread")).unwrap(), vec![task.clone()]);
        assert_eq!(store.list(&TaskFilter::all().query("ölive")).unwrap(), vec![task]);
        assert_eq!(store.list(&TaskFilter::all().query("")).unwrap().len(), 2);
    }

    #[test]
    fn test_list_priority_order() {
        let mut store = Store::open_in_memory().unwrap();
        let low = store.create(NewTask::new("low").priority(Priority::Low)).unwrap();
        let high = store.create(NewTask::new("high").priority(Priority::High)).unwrap();
        let medium = store.create(NewTask::new("medium")).unwrap();
        let high2 = store.create(NewTask::new("high 2").priority(Priority::High)).unwrap();

        let ids: Vec<TaskId> = store
            .list(&TaskFilter::all())
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![high2.id, high.id, medium.id, low.id]);
    }

    #[test]
    fn test_list_created_and_due_order() {
        let mut store = Store::open_in_memory().unwrap();
        let undated = store.create(NewTask::new("undated")).unwrap();
        let later = store.create(NewTask::new("later").due_date(date(2026, 12, 1))).unwrap();
        let sooner = store.create(NewTask::new("sooner").due_date(date(2026, 6, 1))).unwrap();

        let ids = |sort: SortOrder| -> Vec<TaskId> {
            store
                .list(&TaskFilter::all().sort(sort))
                .unwrap()
                .into_iter()
                .map(|t| t.id)
                .collect()
        };

        assert_eq!(ids(SortOrder::Created), vec![sooner.id, later.id, undated.id]);
        assert_eq!(ids(SortOrder::Due), vec![sooner.id, later.id, undated.id]);
    }

    #[test]
    fn test_export_csv_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.csv");
        let (mut store, _, _) = shopping_store();
        store
            .create(NewTask::new("Quote, \"comma\" test").description("line one\nline two"))
            .unwrap();

        let filter = TaskFilter::all().status(StatusFilter::Incomplete).sort(SortOrder::Created);
        let listed = store.list(&filter).unwrap();
        let written = store.export_csv(&path, &filter).unwrap();
        assert_eq!(written, listed.len());

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["id", "title", "description", "due_date", "priority", "completed", "created_at"]
        );

        let mut exported = Vec::new();
        for record in reader.records() {
            let record = record.unwrap();
            exported.push((
                record[0].parse::<i64>().unwrap(),
                record[1].to_string(),
                record[4].parse::<Priority>().unwrap(),
                record[5].parse::<bool>().unwrap(),
            ));
        }

        let expected: Vec<_> = listed
            .iter()
            .map(|t| (t.id.0, t.title.clone(), t.priority, t.completed))
            .collect();
        assert_eq!(exported, expected);
    }

    #[test]
    fn test_export_csv_unwritable_path() {
        let temp = TempDir::new().unwrap();
        let store = Store::open_in_memory().unwrap();

        let err = store
            .export_csv(temp.path().join("missing/dir/tasks.csv"), &TaskFilter::all())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_invalid_persisted_priority() {
        let store = Store::open_in_memory().unwrap();
        store
            .db
            .execute(
                "INSERT INTO tasks (title, priority, created_at) VALUES ('odd', 9, '2026-01-01T00:00:00Z')",
                [],
            )
            .unwrap();

        let err = store.list(&TaskFilter::all()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)));
    }

    #[test]
    fn test_timestamp_db_format() {
        let ts = DateTime::parse_from_rfc3339("2026-10-18T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(timestamp_to_db(&ts), "2026-10-18T09:30:00Z");
        assert_eq!(timestamp_from_db("2026-10-18T09:30:00Z").unwrap(), ts);
        assert_eq!(date_to_db(date(2026, 3, 9)), "2026-03-09");
    }
}
