//! # Scheduler Core Library
//!
//! Recurring-task planning: a repeat-rule engine that computes the next date of a
//! task, the normalization applied to every task submission, and SQLite storage.
//!
//! ## Core Modules
//!
//! - [`rule`]: Repeat-rule grammar (`d 7`, `y`, `w 1,3`, `m -1 1,6`)
//! - [`recurrence`]: Next-date calculation for each rule kind
//! - [`formatting`]: Date normalization of task submissions
//! - [`date`]: The configured date layout
//! - [`models`]: Task data structures
//! - [`query`]: Search terms
//! - [`repository`]: Data access layer with Repository pattern
//! - [`db`]: Database connection and migration management
//! - [`error`]: Error types
//!
//! The engine (`rule`, `recurrence`, `formatting`) never reads the clock: the caller
//! passes today's date in, which keeps every result reproducible.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use scheduler_core::{date::DateFormat, recurrence::next_date};
//!
//! let format = DateFormat::default();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! let next = next_date(today, "20240603", "w 1,3", &format).unwrap();
//! assert_eq!(next, "20240605");
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod formatting;
pub mod models;
pub mod query;
pub mod recurrence;
pub mod repository;
pub mod rule;
