use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

use crate::error::CoreError;

/// Layout used when no `date_format` is configured: `20240601`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y%m%d";

/// The process-wide textual layout of scheduled dates (strftime syntax).
///
/// Built once at startup and handed to every core call. Construction rejects
/// layouts that chrono cannot render or that lose the year, month or day, so
/// [`DateFormat::format`] never fails afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    layout: String,
}

impl DateFormat {
    pub fn new(layout: &str) -> Result<Self, CoreError> {
        if layout.is_empty() || StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
            return Err(CoreError::InvalidInput(format!(
                "Invalid date layout '{}'",
                layout
            )));
        }

        // 29 Feb catches layouts that drop the year or the day.
        let probe = NaiveDate::from_ymd_opt(2024, 2, 29)
            .ok_or_else(|| CoreError::InvalidInput("Invalid probe date".to_string()))?;
        let mut rendered = String::new();
        write!(rendered, "{}", probe.format(layout)).map_err(|_| {
            CoreError::InvalidInput(format!(
                "Date layout '{}' cannot render a calendar date",
                layout
            ))
        })?;

        let format = Self {
            layout: layout.to_string(),
        };
        if format.parse(&rendered) != Some(probe) {
            return Err(CoreError::InvalidInput(format!(
                "Date layout '{}' does not round-trip a calendar date",
                layout
            )));
        }
        Ok(format)
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Parses `text` in this layout; `None` when it does not match.
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text, &self.layout).ok()
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.layout).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            layout: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
