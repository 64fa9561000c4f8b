use clap::Parser;
use owo_colors::{OwoColorize, Style};
use scheduler_core::date::DateFormat;
use scheduler_core::db;
use scheduler_core::error::{CoreError, ScheduleError};
use scheduler_core::repository::SqliteRepository;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

const RULE_HINT: &str = "Repeat rules look like: 'd 7', 'y', 'w 1,3', 'm -1 1,6'";

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let config = match config::Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Failed to load configuration: {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    install_tracing(&config.log_level);

    if let Err(e) = run(cli, config).await {
        handle_error(e);
        std::process::exit(1);
    }
}

fn install_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

async fn run(cli: cli::Cli, config: config::Config) -> anyhow::Result<()> {
    let date_format = DateFormat::new(&config.date_format)?;
    let today = util::resolve_today(cli.today.as_deref(), &date_format)?;
    tracing::debug!(%today, layout = date_format.layout(), "starting");

    match cli.command {
        cli::Commands::Add(command) => {
            let repository = open_repository(&config, &date_format).await?;
            commands::add::add_task(&repository, command, today, &date_format).await
        }
        cli::Commands::Edit(command) => {
            let repository = open_repository(&config, &date_format).await?;
            commands::edit::edit_task(&repository, command, today, &date_format).await
        }
        cli::Commands::Show(command) => {
            let repository = open_repository(&config, &date_format).await?;
            commands::show::show_task(&repository, command, today, &date_format).await
        }
        cli::Commands::List(command) => {
            let repository = open_repository(&config, &date_format).await?;
            commands::list::list_tasks(&repository, command, today, &date_format, &config).await
        }
        cli::Commands::Done(command) => {
            let repository = open_repository(&config, &date_format).await?;
            commands::done::done_task(&repository, command, today).await
        }
        cli::Commands::Delete(command) => {
            let repository = open_repository(&config, &date_format).await?;
            commands::delete::delete_task(&repository, command).await
        }
        // Rule evaluation alone never touches storage.
        cli::Commands::Next(command) => commands::next::next_date(&command, today, &date_format),
    }
}

async fn open_repository(
    config: &config::Config,
    date_format: &DateFormat,
) -> anyhow::Result<SqliteRepository> {
    let db_pool = db::establish_connection(&config.database_path).await?;
    Ok(SqliteRepository::new(db_pool, date_format.clone()))
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    let schedule_error = err.downcast_ref::<ScheduleError>().or_else(|| {
        match err.downcast_ref::<CoreError>() {
            Some(CoreError::Schedule(e)) => Some(e),
            _ => None,
        }
    });

    if let Some(schedule_error) = schedule_error {
        eprintln!("{} {}", "Error:".style(error_style), schedule_error);
        match schedule_error {
            ScheduleError::EmptyRule
            | ScheduleError::UnknownRuleKind(_)
            | ScheduleError::UnexpectedArgument(_)
            | ScheduleError::InvalidInterval(_)
            | ScheduleError::InvalidWeekday(_)
            | ScheduleError::InvalidMonthDay(_)
            | ScheduleError::InvalidMonth(_) => eprintln!("{}", RULE_HINT.dimmed()),
            _ => {}
        }
        return;
    }

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::NotFound(s)) => {
            eprintln!("{} Task not found: {}", "Error:".style(error_style), s.yellow());
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
