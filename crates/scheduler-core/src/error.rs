use thiserror::Error;

/// Validation and computation failures of the repeat-rule engine and the task formatter.
///
/// None of these are system faults: each one means the caller handed in a rule,
/// date or identifier that cannot be scheduled, and should ask for a new one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Repeat rule is empty")]
    EmptyRule,

    #[error("Unknown repeat rule kind: '{0}'")]
    UnknownRuleKind(String),

    #[error("Unexpected argument in repeat rule: '{0}'")]
    UnexpectedArgument(String),

    #[error("Invalid day interval: '{0}' (expected 1-400)")]
    InvalidInterval(String),

    #[error("Invalid weekday: '{0}' (expected 1-7)")]
    InvalidWeekday(String),

    #[error("Invalid day of month: '{0}' (expected -2, -1 or 1-31)")]
    InvalidMonthDay(String),

    #[error("Invalid month: '{0}' (expected 1-12)")]
    InvalidMonth(String),

    #[error("Invalid scheduled date: '{0}'")]
    InvalidDate(String),

    #[error("Invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("Invalid task ID: '{0}'")]
    InvalidId(String),

    #[error("Repeat rule '{0}' has no matching date within the search horizon")]
    NoMatchingDate(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
