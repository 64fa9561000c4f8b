use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::date::DateFormat;
use scheduler_core::error::{CoreError, ScheduleError};
use scheduler_core::formatting::parse_task_id;
use scheduler_core::models::Task;
use scheduler_core::repository::TaskRepository;

/// The effective "today": the `--today` override in the configured layout, or the local date.
pub fn resolve_today(arg: Option<&str>, format: &DateFormat) -> Result<NaiveDate, ScheduleError> {
    match arg {
        Some(text) => format
            .parse(text)
            .ok_or_else(|| ScheduleError::InvalidDateFormat(text.to_string())),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub async fn resolve_task(repo: &impl TaskRepository, id: &str) -> Result<Task> {
    let task_id = parse_task_id(id)?;
    repo.find_task_by_id(task_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(task_id.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_override_uses_configured_layout() {
        let format = DateFormat::new("%Y-%m-%d").unwrap();
        assert_eq!(
            resolve_today(Some("2024-06-01"), &format).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(
            resolve_today(Some("20240601"), &format),
            Err(ScheduleError::InvalidDateFormat("20240601".to_string()))
        );
    }
}
