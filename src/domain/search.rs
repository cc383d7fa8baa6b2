//! Search queries over entries

use crate::error::{JournalError, Result};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Entries created on this calendar day
    Date(NaiveDate),
    /// Case-insensitive substring of title or content
    Keyword(String),
}

impl SearchQuery {
    /// Parse a `YYYY-MM-DD` date
    pub fn by_date(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(SearchQuery::Date)
            .map_err(|_| JournalError::InvalidDate(trimmed.to_string()))
    }

    pub fn by_keyword(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(JournalError::EmptyField("Keyword"));
        }
        Ok(SearchQuery::Keyword(trimmed.to_string()))
    }

    /// Short human description, e.g. `date 2024-01-05`
    pub fn describe(&self) -> String {
        match self {
            SearchQuery::Date(date) => format!("date {}", date.format("%Y-%m-%d")),
            SearchQuery::Keyword(keyword) => format!("keyword '{}'", keyword),
        }
    }
}
