// Query filtering for tasks

use crate::task::{Priority, Task};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Completion-state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl StatusFilter {
    /// SQL predicate on the `completed` column, if any
    pub(crate) fn to_sql(self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Completed => Some("completed = 1"),
            StatusFilter::Incomplete => Some("completed = 0"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" | "done" => Ok(StatusFilter::Completed),
            "incomplete" | "open" | "pending" => Ok(StatusFilter::Incomplete),
            other => Err(format!("unknown status: {other} (expected all, completed or incomplete)")),
        }
    }
}

/// Result ordering; every order ends on `id` so it is total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// High first, then newest first
    #[default]
    Priority,
    /// Newest first
    Created,
    /// Earliest due date first, undated last
    Due,
}

impl SortOrder {
    pub(crate) fn to_sql(self) -> &'static str {
        match self {
            SortOrder::Priority => "priority ASC, created_at DESC, id DESC",
            SortOrder::Created => "created_at DESC, id DESC",
            SortOrder::Due => "due_date IS NULL, due_date ASC, id ASC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "priority" => Ok(SortOrder::Priority),
            "created" | "created_at" => Ok(SortOrder::Created),
            "due" | "due_date" => Ok(SortOrder::Due),
            other => Err(format!("unknown sort order: {other} (expected priority, created or due)")),
        }
    }
}

/// Filter for listing and exporting tasks
///
/// All criteria are combined with AND. The default matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title and description
    pub query: String,
    pub status: StatusFilter,
    pub priority: Option<Priority>,
    pub sort: SortOrder,
}

impl TaskFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Lowercased, trimmed query; `None` when it matches everything
    pub(crate) fn needle(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_lowercase()) }
    }

    /// Whether a task passes every criterion
    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Incomplete => !task.completed,
        };
        let priority_ok = self.priority.is_none_or(|p| p == task.priority);
        let query_ok = self.needle().is_none_or(|n| task.mentions(&n));

        status_ok && priority_ok && query_ok
    }
}
