use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use sqlx::FromRow;

/// A stored task. `date` is kept in the configured layout, `repeat` is the raw rule text
/// (empty for one-off tasks).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl Task {
    pub fn is_recurring(&self) -> bool {
        !self.repeat.is_empty()
    }
}

/// A raw task submission, exactly as a client sent it. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskInput {
    pub id: String,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl From<Task> for TaskInput {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            date: task.date,
            title: task.title,
            comment: task.comment,
            repeat: task.repeat,
        }
    }
}

/// A submission after date normalization: ready to be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTask {
    /// Present when the submission targets an existing task.
    pub id: Option<i64>,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Outcome of marking a task done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// The task did not repeat and was removed.
    Deleted(Task),
    /// The task repeats; its date moved forward in place.
    Rescheduled { task: Task, previous_date: String },
}
