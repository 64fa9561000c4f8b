use chrono::{Duration, NaiveDate};
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use scheduler_core::date::DateFormat;
use scheduler_core::models::Task;

#[derive(Debug, Clone)]
pub struct ViewTask {
    pub id: i64,
    pub date: String,
    /// `None` when the stored text no longer matches the configured layout.
    pub scheduled: Option<NaiveDate>,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl ViewTask {
    pub fn new(task: Task, format: &DateFormat) -> Self {
        Self {
            id: task.id,
            scheduled: format.parse(&task.date),
            date: task.date,
            title: task.title,
            comment: task.comment,
            repeat: task.repeat,
        }
    }
}

/// "today", "in 3 days", "a month ago"...
pub fn relative_day(date: NaiveDate, today: NaiveDate) -> String {
    let days = (date - today).num_days();
    if days == 0 {
        "today".to_string()
    } else {
        HumanTime::from(Duration::days(days)).to_string()
    }
}

pub fn display_tasks(tasks: &[ViewTask], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "When", "Title", "Repeat", "Comment"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));
        row.add_cell(Cell::new(&task.date));

        let when_cell = match task.scheduled {
            Some(date) => {
                let cell = Cell::new(relative_day(date, today));
                if date < today {
                    cell.fg(Color::Red)
                } else if date == today {
                    cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            }
            None => Cell::new("?").fg(Color::DarkGrey),
        };
        row.add_cell(when_cell);

        let mut title = String::new();
        if !task.repeat.is_empty() {
            title.push_str("↻ ");
        }
        title.push_str(&task.title);
        row.add_cell(Cell::new(title));

        row.add_cell(Cell::new(if task.repeat.is_empty() { "-" } else { task.repeat.as_str() }));
        row.add_cell(Cell::new(&task.comment).fg(Color::DarkGrey));
        table.add_row(row);
    }

    println!("{table}");
}
