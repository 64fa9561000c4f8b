use chrono::NaiveDate;

use crate::date::DateFormat;
use crate::error::ScheduleError;
use crate::models::{NormalizedTask, TaskInput};
use crate::rule;

/// Literal accepted in place of a date, case-insensitively.
pub const TODAY: &str = "today";

/// Parses a task identifier: a non-empty string of ASCII digits.
pub fn parse_task_id(id: &str) -> Result<i64, ScheduleError> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScheduleError::InvalidId(id.to_string()));
    }
    id.parse::<i64>()
        .map_err(|_| ScheduleError::InvalidId(id.to_string()))
}

/// Normalizes a task submission before it is stored.
///
/// # Behavior
/// - An empty date or `today` becomes `today`
/// - Any other date must match `format` (`InvalidDateFormat`)
/// - A non-empty `id` must be a non-negative integer (`InvalidId`)
/// - A date before `today` moves to the next occurrence of the task's rule,
///   or to `today` when the task does not repeat
/// - The returned date is always rendered in `format`, whatever the input spelling
/// - Titles are not checked here
pub fn format_task(
    task: TaskInput,
    today: NaiveDate,
    format: &DateFormat,
) -> Result<NormalizedTask, ScheduleError> {
    let date = if task.date.is_empty() || task.date.eq_ignore_ascii_case(TODAY) {
        today
    } else {
        format
            .parse(&task.date)
            .ok_or_else(|| ScheduleError::InvalidDateFormat(task.date.clone()))?
    };

    let id = if task.id.is_empty() {
        None
    } else {
        Some(parse_task_id(&task.id)?)
    };

    let date = if date >= today {
        date
    } else if task.repeat.is_empty() {
        today
    } else {
        rule::parse(&task.repeat)?.next_after(today, date)?
    };

    Ok(NormalizedTask {
        id,
        date: format.format(date),
        title: task.title,
        comment: task.comment,
        repeat: task.repeat,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn input(date: &str, repeat: &str) -> TaskInput {
        TaskInput {
            date: date.to_string(),
            title: "Water the plants".to_string(),
            repeat: repeat.to_string(),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("")]
    #[case("today")]
    #[case("ToDay")]
    fn test_missing_date_becomes_today(#[case] date: &str) {
        let task = format_task(input(date, ""), today(), &DateFormat::default()).unwrap();
        assert_eq!(task.date, "20240601");
        assert_eq!(task.id, None);
    }

    #[test]
    fn test_future_date_is_kept() {
        let task = format_task(input("20240710", "d 3"), today(), &DateFormat::default()).unwrap();
        assert_eq!(task.date, "20240710");
        assert_eq!(task.repeat, "d 3");
        assert_eq!(task.title, "Water the plants");
    }

    #[rstest]
    #[case("2024071", "20240701")]
    #[case("20240710", "20240710")]
    fn test_date_is_rendered_in_layout(#[case] date: &str, #[case] expected: &str) {
        let task = format_task(input(date, ""), today(), &DateFormat::default()).unwrap();
        assert_eq!(task.date, expected);
    }

    #[test]
    fn test_today_is_not_lapsed() {
        let task = format_task(input("20240601", "d 3"), today(), &DateFormat::default()).unwrap();
        assert_eq!(task.date, "20240601");
    }

    #[test]
    fn test_lapsed_one_off_snaps_to_today() {
        let task = format_task(input("20240101", ""), today(), &DateFormat::default()).unwrap();
        assert_eq!(task.date, "20240601");
    }

    #[test]
    fn test_lapsed_recurring_advances() {
        let task = format_task(input("20240520", "d 7"), today(), &DateFormat::default()).unwrap();
        assert_eq!(task.date, "20240603");
    }

    #[test]
    fn test_lapsed_recurring_with_bad_rule_fails() {
        let result = format_task(input("20240520", "w 9"), today(), &DateFormat::default());
        assert_eq!(result, Err(ScheduleError::InvalidWeekday("9".to_string())));
    }

    #[test]
    fn test_invalid_date_format() {
        let result = format_task(input("01.06.2024", ""), today(), &DateFormat::default());
        assert_eq!(
            result,
            Err(ScheduleError::InvalidDateFormat("01.06.2024".to_string()))
        );
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case("0", Some(0))]
    #[case("", None)]
    fn test_valid_ids(#[case] id: &str, #[case] expected: Option<i64>) {
        let mut task = input("", "");
        task.id = id.to_string();
        let task = format_task(task, today(), &DateFormat::default()).unwrap();
        assert_eq!(task.id, expected);
    }

    #[rstest]
    #[case("-1")]
    #[case("abc")]
    #[case("1a")]
    #[case(" 7")]
    #[case("99999999999999999999")]
    fn test_invalid_ids(#[case] id: &str) {
        let mut task = input("", "");
        task.id = id.to_string();
        let result = format_task(task, today(), &DateFormat::default());
        assert_eq!(result, Err(ScheduleError::InvalidId(id.to_string())));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let format = DateFormat::default();
        let once = format_task(input("20240101", "m -1"), today(), &format).unwrap();
        let again = format_task(
            TaskInput {
                id: String::new(),
                date: once.date.clone(),
                title: once.title.clone(),
                comment: once.comment.clone(),
                repeat: once.repeat.clone(),
            },
            today(),
            &format,
        )
        .unwrap();
        assert_eq!(once, again);
        assert_eq!(once.date, "20240630");
    }

    #[test]
    fn test_custom_layout() {
        let format = DateFormat::new("%Y-%m-%d").unwrap();
        let task = format_task(input("2024-05-01", ""), today(), &format).unwrap();
        assert_eq!(task.date, "2024-06-01");
    }
}
