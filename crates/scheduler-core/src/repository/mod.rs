use crate::date::DateFormat;
use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NormalizedTask, Task};
use crate::query::SearchQuery;
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod tasks;

/// Storage operations on scheduled tasks.
///
/// Every write is a single statement or a single transaction, so a failed
/// operation leaves the stored task untouched.
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, task: NormalizedTask) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    async fn update_task(&self, task: NormalizedTask) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    async fn search_tasks(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Task>, CoreError>;
    /// Marks a task done: recurring tasks move to their next date, others are deleted.
    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
    date_format: DateFormat,
}

impl SqliteRepository {
    pub fn new(pool: DbPool, date_format: DateFormat) -> Self {
        Self { pool, date_format }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }
}
