use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::date::DateFormat;
use scheduler_core::recurrence;

use crate::cli::NextCommand;
use crate::util::resolve_today;

/// Prints the next occurrence of `--repeat` after `--date`, relative to `--now` or today.
pub fn next_date(command: &NextCommand, today: NaiveDate, format: &DateFormat) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(text) => resolve_today(Some(text), format)?,
        None => today,
    };
    let next = recurrence::next_date(now, &command.date, &command.repeat, format)?;
    println!("{}", next);
    Ok(())
}
