// todostore - Local to-do task store with SQLite persistence and CSV export

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::Config;
pub use error::{ErrorKind, StoreError, StoreResult};
pub use filter::{SortOrder, StatusFilter, TaskFilter};
pub use store::Store;
pub use task::{NewTask, Priority, Task, TaskId, TaskUpdate, now_utc};
