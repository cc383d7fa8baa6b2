//! Create entry use case

use crate::domain::NewEntry;
use crate::error::Result;
use crate::infrastructure::Store;
use chrono::{NaiveDateTime, Utc};
use tracing::info;

/// Create an entry stamped with the current UTC time and return its id.
pub fn create_entry(store: &Store, draft: NewEntry) -> Result<i64> {
    create_entry_at(store, draft, Utc::now().naive_utc())
}

/// Create an entry with an explicit creation timestamp.
pub fn create_entry_at(store: &Store, draft: NewEntry, date: NaiveDateTime) -> Result<i64> {
    let id = store.with_session(|session| session.insert_entry(&draft, date))?;
    info!(entry_id = id, private = draft.is_private, "entry created");
    Ok(id)
}
