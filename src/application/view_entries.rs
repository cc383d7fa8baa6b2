//! View entries use cases

use crate::domain::Entry;
use crate::error::{JournalError, Result};
use crate::infrastructure::Store;

/// All entries, newest first. An empty journal yields an empty list.
pub fn list_entries(store: &Store) -> Result<Vec<Entry>> {
    store.with_session(|session| session.list_entries())
}

/// A single entry with its tags
pub fn get_entry(store: &Store, id: i64) -> Result<Entry> {
    store.with_session(|session| {
        session
            .find_entry(id)?
            .ok_or(JournalError::EntryNotFound(id))
    })
}
