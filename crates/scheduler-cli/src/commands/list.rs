use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::date::DateFormat;
use scheduler_core::query::SearchQuery;
use scheduler_core::repository::TaskRepository;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::views::table::{display_tasks, ViewTask};

pub async fn list_tasks(
    repo: &impl TaskRepository,
    command: ListCommand,
    today: NaiveDate,
    format: &DateFormat,
    config: &Config,
) -> Result<()> {
    let query = SearchQuery::parse(&command.search);
    let limit = command.limit.unwrap_or(config.search_limit);
    let tasks = repo.search_tasks(&query, limit).await?;

    if command.json {
        let body = serde_json::json!({ "tasks": tasks });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let view_tasks: Vec<ViewTask> = tasks
        .into_iter()
        .map(|t| ViewTask::new(t, format))
        .collect();

    display_tasks(&view_tasks, today);

    Ok(())
}
