use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use scheduler_core::date::DateFormat;
use scheduler_core::formatting::format_task;
use scheduler_core::models::TaskInput;
use scheduler_core::repository::TaskRepository;

use crate::cli::AddCommand;
use crate::commands::validate_repeat;
use crate::parser::parse_date_input;

pub async fn add_task(
    repo: &impl TaskRepository,
    command: AddCommand,
    today: NaiveDate,
    format: &DateFormat,
) -> Result<()> {
    let repeat = command.repeat.map(|r| r.trim().to_string()).unwrap_or_default();
    validate_repeat(&repeat)?;

    let date = command
        .date
        .as_deref()
        .map(|d| parse_date_input(d, today, format))
        .unwrap_or_default();

    let input = TaskInput {
        id: String::new(),
        date,
        title: command.title,
        comment: command.comment.unwrap_or_default(),
        repeat,
    };
    let task = repo.add_task(format_task(input, today, format)?).await?;

    println!("{} Created task: {}", "✓".green().bold(), task.title.bold());
    println!("  {} Task ID: {}", "→".dimmed(), task.id.to_string().cyan());
    println!("  {} Scheduled: {}", "→".dimmed(), task.date);
    if task.is_recurring() {
        println!("  {} Repeats: {}", "→".dimmed(), task.repeat);
    }

    Ok(())
}
