//! Repeat-rule grammar.
//!
//! A rule is a short whitespace-separated string whose first token selects the kind:
//!
//! | rule               | meaning                                             |
//! |--------------------|-----------------------------------------------------|
//! | `d 7`              | every 7 days (1-400)                                |
//! | `y`                | every year on the same month and day                |
//! | `w 1,3`            | every Monday and Wednesday (ISO weekdays 1-7)       |
//! | `m 1,-1`           | first and last day of every month                   |
//! | `m -2 1,6`         | second-to-last day of January and June              |
//!
//! Rules are stored as text and parsed again on every use.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

pub const MAX_INTERVAL_DAYS: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatRule {
    /// Every `interval` days.
    Daily { interval: u32 },
    /// Same month and day every year.
    Yearly,
    /// On each listed ISO weekday (1 = Monday .. 7 = Sunday).
    Weekly { weekdays: BTreeSet<u32> },
    /// On each listed day of the listed months; an empty `months` set means every month.
    /// `-1` is the last day of the month and `-2` the one before it.
    Monthly {
        days: BTreeSet<i32>,
        months: BTreeSet<u32>,
    },
}

/// Parses a repeat rule. The empty rule is an error: callers check for "no rule" first.
pub fn parse(rule: &str) -> Result<RepeatRule, ScheduleError> {
    let mut tokens = rule.split_whitespace();
    let kind = tokens.next().ok_or(ScheduleError::EmptyRule)?;

    let parsed = match kind {
        "d" => {
            let raw = tokens
                .next()
                .ok_or_else(|| ScheduleError::InvalidInterval(String::new()))?;
            let interval = raw
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=MAX_INTERVAL_DAYS).contains(n))
                .ok_or_else(|| ScheduleError::InvalidInterval(raw.to_string()))?;
            RepeatRule::Daily { interval }
        }
        "y" => RepeatRule::Yearly,
        "w" => {
            let raw = tokens
                .next()
                .ok_or_else(|| ScheduleError::InvalidWeekday(String::new()))?;
            let mut weekdays = BTreeSet::new();
            for value in parse_list(raw, 1..=7, ScheduleError::InvalidWeekday)? {
                if !weekdays.insert(value as u32) {
                    return Err(ScheduleError::InvalidWeekday(value.to_string()));
                }
            }
            RepeatRule::Weekly { weekdays }
        }
        "m" => {
            let raw_days = tokens
                .next()
                .ok_or_else(|| ScheduleError::InvalidMonthDay(String::new()))?;
            let days = parse_list(raw_days, -2..=31, ScheduleError::InvalidMonthDay)?
                .into_iter()
                .map(|day| {
                    if day == 0 {
                        Err(ScheduleError::InvalidMonthDay(day.to_string()))
                    } else {
                        Ok(day as i32)
                    }
                })
                .collect::<Result<BTreeSet<_>, _>>()?;

            let months = match tokens.next() {
                Some(raw_months) => parse_list(raw_months, 1..=12, ScheduleError::InvalidMonth)?
                    .into_iter()
                    .map(|month| month as u32)
                    .collect(),
                None => BTreeSet::new(),
            };
            RepeatRule::Monthly { days, months }
        }
        other => return Err(ScheduleError::UnknownRuleKind(other.to_string())),
    };

    if let Some(extra) = tokens.next() {
        return Err(ScheduleError::UnexpectedArgument(extra.to_string()));
    }
    Ok(parsed)
}

/// Splits a comma-separated list of integers, rejecting empty entries and values outside `range`.
fn parse_list(
    raw: &str,
    range: std::ops::RangeInclusive<i64>,
    invalid: fn(String) -> ScheduleError,
) -> Result<Vec<i64>, ScheduleError> {
    raw.split(',')
        .map(|part| {
            part.parse::<i64>()
                .ok()
                .filter(|value| range.contains(value))
                .ok_or_else(|| invalid(part.to_string()))
        })
        .collect()
}

impl FromStr for RepeatRule {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn join<T: fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Canonical text form; parsing it yields an equal rule.
impl fmt::Display for RepeatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatRule::Daily { interval } => write!(f, "d {}", interval),
            RepeatRule::Yearly => write!(f, "y"),
            RepeatRule::Weekly { weekdays } => write!(f, "w {}", join(weekdays)),
            RepeatRule::Monthly { days, months } if months.is_empty() => {
                write!(f, "m {}", join(days))
            }
            RepeatRule::Monthly { days, months } => {
                write!(f, "m {} {}", join(days), join(months))
            }
        }
    }
}
