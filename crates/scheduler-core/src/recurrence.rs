use std::collections::BTreeSet;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::date::DateFormat;
use crate::error::ScheduleError;
use crate::rule::{self, RepeatRule};

/// How far ahead monthly rules are searched before giving up with `NoMatchingDate`.
pub const SEARCH_HORIZON_YEARS: u32 = 5;

const SEARCH_HORIZON_MONTHS: u32 = SEARCH_HORIZON_YEARS * 12 + 1;

/// Computes the next scheduled date of a task from its stored text fields.
///
/// # Arguments
/// * `today` - The caller's current calendar date
/// * `current` - The task's scheduled date (the anchor), in `format`
/// * `repeat` - The task's repeat rule text; must not be empty
/// * `format` - The configured date layout
///
/// # Returns
/// * `Result<String, ScheduleError>` - The next date in `format`, strictly after `today`
///
/// # Behavior
/// - `current` is validated before the rule (`InvalidDate`)
/// - The rule is parsed fresh on every call
pub fn next_date(
    today: NaiveDate,
    current: &str,
    repeat: &str,
    format: &DateFormat,
) -> Result<String, ScheduleError> {
    let anchor = format
        .parse(current)
        .ok_or_else(|| ScheduleError::InvalidDate(current.to_string()))?;
    let rule = rule::parse(repeat)?;
    let next = rule.next_after(today, anchor)?;
    Ok(format.format(next))
}

impl RepeatRule {
    /// Returns the first occurrence of this rule strictly after `today`, counted from `anchor`.
    ///
    /// Daily and yearly rules always move at least one period past `anchor`; weekly and
    /// monthly rules return the first matching day after both `anchor` and `today`.
    /// A yearly rule anchored on 29 February lands on 28 February in common years.
    pub fn next_after(&self, today: NaiveDate, anchor: NaiveDate) -> Result<NaiveDate, ScheduleError> {
        let next = match self {
            RepeatRule::Daily { interval } => next_daily(today, anchor, *interval),
            RepeatRule::Yearly => next_yearly(today, anchor),
            RepeatRule::Weekly { weekdays } => next_weekly(today, anchor, weekdays),
            RepeatRule::Monthly { days, months } => next_monthly(today, anchor, days, months),
        };
        next.ok_or_else(|| ScheduleError::NoMatchingDate(self.to_string()))
    }
}

fn next_daily(today: NaiveDate, anchor: NaiveDate, interval: u32) -> Option<NaiveDate> {
    let step = i64::from(interval);
    let first = anchor.checked_add_days(Days::new(u64::from(interval)))?;
    if first > today {
        return Some(first);
    }

    // Jump straight over the lapsed periods instead of stepping through them.
    let behind = (today - first).num_days();
    let steps = behind / step + 1;
    first.checked_add_days(Days::new(u64::try_from(steps * step).ok()?))
}

fn anniversary(year: i32, anchor: NaiveDate) -> Option<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day()) {
        Some(date) => Some(date),
        // Only 29 February can be missing from a year.
        None if anchor.month() == 2 && anchor.day() == 29 => NaiveDate::from_ymd_opt(year, 2, 28),
        None => None,
    }
}

fn next_yearly(today: NaiveDate, anchor: NaiveDate) -> Option<NaiveDate> {
    let mut year = anchor.year().checked_add(1)?.max(today.year());
    // The anniversary in today's year is either past or it is the answer, so two probes suffice.
    for _ in 0..2 {
        let candidate = anniversary(year, anchor)?;
        if candidate > today {
            return Some(candidate);
        }
        year = year.checked_add(1)?;
    }
    None
}

fn next_weekly(today: NaiveDate, anchor: NaiveDate, weekdays: &BTreeSet<u32>) -> Option<NaiveDate> {
    let floor = anchor.max(today);
    (1..=7)
        .filter_map(|offset| floor.checked_add_days(Days::new(offset)))
        .find(|date| weekdays.contains(&date.weekday().number_from_monday()))
}

fn days_in_month(month_start: NaiveDate) -> Option<u32> {
    let next_month = month_start.checked_add_months(Months::new(1))?;
    u32::try_from((next_month - month_start).num_days()).ok()
}

/// Maps a rule day onto a month of `length` days; positive days past the end are skipped.
fn resolve_day(day: i32, length: u32) -> Option<u32> {
    match day {
        -1 => Some(length),
        -2 => length.checked_sub(1),
        d if d > 0 => u32::try_from(d).ok().filter(|d| *d <= length),
        _ => None,
    }
}

fn next_monthly(
    today: NaiveDate,
    anchor: NaiveDate,
    days: &BTreeSet<i32>,
    months: &BTreeSet<u32>,
) -> Option<NaiveDate> {
    let floor = anchor.max(today);
    let first_month = floor.with_day(1)?;

    for offset in 0..SEARCH_HORIZON_MONTHS {
        let month_start = first_month.checked_add_months(Months::new(offset))?;
        if !months.is_empty() && !months.contains(&month_start.month()) {
            continue;
        }

        let length = days_in_month(month_start)?;
        let candidate = days
            .iter()
            .filter_map(|&day| resolve_day(day, length))
            .filter_map(|day| month_start.with_day(day))
            .filter(|date| *date > floor)
            .min();
        if candidate.is_some() {
            return candidate;
        }
    }
    None
}
