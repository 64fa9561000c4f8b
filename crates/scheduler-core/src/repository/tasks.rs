use crate::date::DateFormat;
use crate::error::CoreError;
use crate::models::{CompletionResult, NormalizedTask, Task};
use crate::query::SearchQuery;
use crate::recurrence::next_date;
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite};
use tracing::{debug, info};

const TASK_COLUMNS: &str = "id, date, title, comment, repeat";

// Single-row reads use `fetch_all`: a SQLite statement left mid-step keeps its
// transaction open on the pooled connection, hiding writes from other connections.

fn ensure_title(task: &NormalizedTask) -> Result<(), CoreError> {
    if task.title.trim().is_empty() {
        return Err(CoreError::InvalidInput("Task title cannot be empty".to_string()));
    }
    Ok(())
}

/// Escapes LIKE wildcards so search text matches literally.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Orders tasks by calendar date, then id. Dates that no longer parse go last.
fn sort_by_schedule(tasks: &mut [Task], format: &DateFormat) {
    tasks.sort_by_cached_key(|task| {
        let date = format.parse(&task.date);
        (date.is_none(), date, task.id)
    });
}

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, task: NormalizedTask) -> Result<Task, CoreError> {
        ensure_title(&task)?;

        let mut tx = self.pool().begin().await?;
        let added: Task = sqlx::query_as(&format!(
            "INSERT INTO scheduler (date, title, comment, repeat) VALUES ($1, $2, $3, $4) RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(&task.date)
        .bind(&task.title)
        .bind(&task.comment)
        .bind(&task.repeat)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .next()
        .ok_or(CoreError::Database(sqlx::Error::RowNotFound))?;
        tx.commit().await?;

        info!(id = added.id, date = %added.date, "task added");
        Ok(added)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as(&format!("SELECT {} FROM scheduler WHERE id = $1", TASK_COLUMNS))
            .bind(id)
            .fetch_all(self.pool())
            .await?
            .into_iter()
            .next();
        Ok(task)
    }

    async fn update_task(&self, task: NormalizedTask) -> Result<Task, CoreError> {
        let id = task
            .id
            .ok_or_else(|| CoreError::InvalidInput("Task ID is required for updates".to_string()))?;
        ensure_title(&task)?;

        let mut tx = self.pool().begin().await?;
        let updated: Task = sqlx::query_as(&format!(
            "UPDATE scheduler SET date = $1, title = $2, comment = $3, repeat = $4 WHERE id = $5 RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(&task.date)
        .bind(&task.title)
        .bind(&task.comment)
        .bind(&task.repeat)
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        tx.commit().await?;

        info!(id, date = %updated.date, "task updated");
        Ok(updated)
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        info!(id, "task deleted");
        Ok(())
    }

    async fn search_tasks(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Task>, CoreError> {
        let mut query_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM scheduler", TASK_COLUMNS));

        match query {
            SearchQuery::All => {}
            SearchQuery::Date(date) => {
                query_builder
                    .push(" WHERE date = ")
                    .push_bind(self.date_format().format(*date));
            }
            SearchQuery::Text(text) => {
                let pattern = like_pattern(text);
                query_builder
                    .push(" WHERE title LIKE ")
                    .push_bind(pattern.clone())
                    .push(" ESCAPE '\\' OR comment LIKE ")
                    .push_bind(pattern)
                    .push(" ESCAPE '\\'");
            }
        }

        // Stored dates only sort as text in some layouts, so ordering happens here.
        query_builder.push(" ORDER BY id");

        debug!(sql = query_builder.sql(), "searching tasks");
        let mut tasks: Vec<Task> = query_builder.build_query_as().fetch_all(self.pool()).await?;
        sort_by_schedule(&mut tasks, self.date_format());
        tasks.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(tasks)
    }

    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as(&format!("SELECT {} FROM scheduler WHERE id = $1", TASK_COLUMNS))
            .bind(id)
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        if !task.is_recurring() {
            sqlx::query("DELETE FROM scheduler WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            info!(id, "one-off task done, deleted");
            return Ok(CompletionResult::Deleted(task));
        }

        // A bad rule or date aborts here; dropping `tx` rolls back.
        let next = next_date(today, &task.date, &task.repeat, self.date_format())?;

        let rescheduled: Task = sqlx::query_as(&format!(
            "UPDATE scheduler SET date = $1 WHERE id = $2 RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(&next)
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        tx.commit().await?;

        info!(id, from = %task.date, to = %next, "recurring task done, rescheduled");
        Ok(CompletionResult::Rescheduled {
            task: rescheduled,
            previous_date: task.date,
        })
    }
}
