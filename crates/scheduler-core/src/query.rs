use chrono::NaiveDate;

/// Layout of dates typed into a search box, independent of the storage layout.
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// No search term: every task.
    All,
    /// Tasks scheduled on exactly this date.
    Date(NaiveDate),
    /// Tasks whose title or comment contains the text.
    Text(String),
}

impl SearchQuery {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return SearchQuery::All;
        }
        match NaiveDate::parse_from_str(input, SEARCH_DATE_FORMAT) {
            Ok(date) => SearchQuery::Date(date),
            Err(_) => SearchQuery::Text(input.to_string()),
        }
    }
}
