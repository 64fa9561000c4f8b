use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use scheduler_core::date::DateFormat;
use scheduler_core::repository::TaskRepository;

use crate::cli::ShowCommand;
use crate::util::resolve_task;
use crate::views::table::relative_day;

pub async fn show_task(
    repo: &impl TaskRepository,
    command: ShowCommand,
    today: NaiveDate,
    format: &DateFormat,
) -> Result<()> {
    let task = resolve_task(repo, &command.id).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }

    let when = format
        .parse(&task.date)
        .map(|date| format!(" ({})", relative_day(date, today)))
        .unwrap_or_default();

    println!("{} {}", "Task".bold(), task.id.to_string().cyan());
    println!("  Title:   {}", task.title);
    println!("  Date:    {}{}", task.date, when);
    println!(
        "  Repeat:  {}",
        if task.is_recurring() { task.repeat.as_str() } else { "-" }
    );
    if !task.comment.is_empty() {
        println!("  Comment: {}", task.comment);
    }

    Ok(())
}
