use clap::{Parser, Subcommand};

/// Scheduler: a planner for one-off and recurring tasks
///
/// Repeat rules: `d <1-400>` every N days, `y` yearly, `w <1-7,...>` on ISO
/// weekdays, `m <days> [months]` on month days (-1 last, -2 second-to-last).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Treat this date (in the configured date format) as today
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Show a single task
    Show(ShowCommand),
    /// List or search tasks
    List(ListCommand),
    /// Mark a task as done: recurring tasks move to their next date, others are removed
    Done(DoneCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Print the next date of a repeat rule without touching any task
    Next(NextCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The scheduled date: configured format, 'today', or a phrase like 'next friday'
    #[clap(short, long)]
    pub date: Option<String>,
    /// A free-form comment
    #[clap(short, long)]
    pub comment: Option<String>,
    /// The repeat rule (e.g. 'd 7', 'y', 'w 1,3', 'm -1 1,6')
    #[clap(short, long)]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,
    #[arg(long, conflicts_with = "comment")]
    pub comment_clear: bool,

    #[arg(long, help = "Update the repeat rule")]
    pub repeat: Option<String>,
    #[arg(long, conflicts_with = "repeat", help = "Remove the repeat rule (convert to one-off task)")]
    pub repeat_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID of the task to show
    pub id: String,
    /// Print the task as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Search text, or a date as dd.mm.yyyy
    #[clap(default_value = "")]
    pub search: String,
    /// Print the tasks as JSON
    #[clap(long)]
    pub json: bool,
    /// Maximum number of tasks to show (defaults to the configured search_limit)
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to mark as done
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    /// The anchor date, in the configured format
    #[clap(long)]
    pub date: String,
    /// The repeat rule
    #[clap(long)]
    pub repeat: String,
    /// Compute relative to this date instead of today
    #[clap(long)]
    pub now: Option<String>,
}
