//! Update entry use case

use crate::domain::{Entry, EntryUpdate};
use crate::error::{JournalError, Result};
use crate::infrastructure::Store;
use tracing::info;

/// Apply `update` to an existing entry and return the stored result.
pub fn update_entry(store: &Store, id: i64, update: EntryUpdate) -> Result<Entry> {
    let entry = store.with_session(|session| {
        let mut entry = session
            .find_entry(id)?
            .ok_or(JournalError::EntryNotFound(id))?;

        if !update.is_empty() {
            update.apply_to(&mut entry);
            session.update_entry(&entry)?;
        }
        Ok(entry)
    })?;

    info!(
        entry_id = id,
        title = update.title.is_some(),
        content = update.content.is_some(),
        privacy = update.is_private.is_some(),
        "entry updated"
    );
    Ok(entry)
}
