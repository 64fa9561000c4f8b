use chrono::NaiveDate;
use chrono_english::{parse_date_string, Dialect};
use scheduler_core::date::DateFormat;
use scheduler_core::formatting::TODAY;

/// Turns a user-typed date into the configured layout.
///
/// Empty input, `today` and dates already in the layout pass through untouched.
/// Phrases such as `tomorrow` or `next friday` are resolved against `today`.
/// Anything else is passed through so the formatter reports it as an invalid date.
pub fn parse_date_input(input: &str, today: NaiveDate, format: &DateFormat) -> String {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case(TODAY) || format.parse(input).is_some() {
        return input.to_string();
    }

    let Some(anchor) = today.and_hms_opt(12, 0, 0) else {
        return input.to_string();
    };
    match parse_date_string(input, anchor.and_utc(), Dialect::Uk) {
        Ok(parsed) => {
            let resolved = format.format(parsed.date_naive());
            tracing::debug!(input, %resolved, "resolved natural-language date");
            resolved
        }
        Err(_) => input.to_string(),
    }
}
