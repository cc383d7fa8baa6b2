//! Search entries use case

use crate::domain::{Entry, SearchQuery};
use crate::error::Result;
use crate::infrastructure::Store;
use tracing::debug;

/// Entries matching a date or keyword query, newest first.
pub fn search_entries(store: &Store, query: &SearchQuery) -> Result<Vec<Entry>> {
    let entries = store.with_session(|session| match query {
        SearchQuery::Date(date) => session.entries_on_date(*date),
        SearchQuery::Keyword(keyword) => session.entries_matching(keyword),
    })?;

    debug!(query = %query.describe(), matches = entries.len(), "search finished");
    Ok(entries)
}
