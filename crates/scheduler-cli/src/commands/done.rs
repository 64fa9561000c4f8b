use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::formatting::parse_task_id;
use scheduler_core::models::CompletionResult;
use scheduler_core::repository::TaskRepository;

use crate::cli::DoneCommand;

pub async fn done_task(repo: &impl TaskRepository, command: DoneCommand, today: NaiveDate) -> Result<()> {
    let task_id = parse_task_id(&command.id)?;

    match repo.complete_task(task_id, today).await? {
        CompletionResult::Deleted(task) => {
            println!("Completed task: '{}'", task.title);
            println!("Removed task '{}' (it does not repeat)", task.title);
        }
        CompletionResult::Rescheduled { task, previous_date } => {
            println!("Completed task: '{}'", task.title);
            println!(
                "Rescheduled '{}' from {} to {} ({})",
                task.title, previous_date, task.date, task.repeat
            );
        }
    }

    Ok(())
}
