use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use scheduler_core::date::DateFormat;
use scheduler_core::formatting::format_task;
use scheduler_core::models::TaskInput;
use scheduler_core::repository::TaskRepository;

use crate::cli::EditCommand;
use crate::commands::validate_repeat;
use crate::parser::parse_date_input;
use crate::util::resolve_task;

pub async fn edit_task(
    repo: &impl TaskRepository,
    command: EditCommand,
    today: NaiveDate,
    format: &DateFormat,
) -> Result<()> {
    let task = resolve_task(repo, &command.id).await?;
    let mut input = TaskInput::from(task);

    if let Some(title) = command.title {
        input.title = title;
    }
    if let Some(date) = command.date {
        input.date = parse_date_input(&date, today, format);
    }
    if let Some(comment) = command.comment {
        input.comment = comment;
    }
    if command.comment_clear {
        input.comment.clear();
    }
    if let Some(repeat) = command.repeat {
        let repeat = repeat.trim().to_string();
        validate_repeat(&repeat)?;
        input.repeat = repeat;
    }
    if command.repeat_clear {
        input.repeat.clear();
    }

    // A stored date that has lapsed is normalized again, exactly like a new submission.
    let updated = repo.update_task(format_task(input, today, format)?).await?;

    println!("{} Updated task: {}", "✓".green().bold(), updated.title.bold());
    println!("  {} Scheduled: {}", "→".dimmed(), updated.date);
    if updated.is_recurring() {
        println!("  {} Repeats: {}", "→".dimmed(), updated.repeat);
    }

    Ok(())
}
