use serde::Deserialize;
use figment::{Figment, providers::{Format, Toml, Env}};
use scheduler_core::date::DEFAULT_DATE_FORMAT;

const CONFIG_FILE: &str = "scheduler.toml";

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// SQLite database file
    pub database_path: String,
    /// strftime layout of every date the scheduler reads or prints
    pub date_format: String,
    /// Default maximum number of tasks returned by `list`
    pub search_limit: u32,
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "scheduler.db".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            search_limit: 50,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed("SCHEDULER_")),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }
}
