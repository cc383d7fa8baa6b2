//! Delete entry use case

use crate::domain::Entry;
use crate::error::{JournalError, Result};
use crate::infrastructure::Store;
use tracing::info;

/// Delete an entry and its tag links. Tags themselves are kept.
/// Returns the entry as it was before deletion.
pub fn delete_entry(store: &Store, id: i64) -> Result<Entry> {
    let (entry, detached) = store.with_session(|session| {
        let entry = session
            .find_entry(id)?
            .ok_or(JournalError::EntryNotFound(id))?;
        let detached = session.delete_entry(id)?;
        Ok((entry, detached))
    })?;

    info!(entry_id = id, detached, "entry deleted");
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{at, seed};
    use crate::application::{apply_tag_delta, entries_by_tag, get_entry, list_entries, list_tags};
    use crate::domain::TagDelta;

    #[test]
    fn deleting_entry_keeps_tags_and_other_links() {
        let store = Store::open_in_memory().unwrap();
        let doomed = seed(&store, "Doomed", "a", at(2024, 1, 5, 9));
        let kept = seed(&store, "Kept", "b", at(2024, 1, 6, 9));
        apply_tag_delta(&store, doomed, &TagDelta::parse("work, travel")).unwrap();
        apply_tag_delta(&store, kept, &TagDelta::parse("work")).unwrap();

        let removed = delete_entry(&store, doomed).unwrap();
        assert_eq!(removed.title, "Doomed");
        assert_eq!(removed.tags, vec!["Work", "Travel"]);

        assert!(matches!(
            get_entry(&store, doomed),
            Err(JournalError::EntryNotFound(_))
        ));
        let tag_names: Vec<String> = list_tags(&store)
            .unwrap()
            .into_iter()
            .map(|(tag, _)| tag.name)
            .collect();
        assert_eq!(tag_names, vec!["Travel", "Work"]);

        let (_, work_entries) = entries_by_tag(&store, "work").unwrap();
        assert_eq!(work_entries.len(), 1);
        assert_eq!(work_entries[0].id, kept);
        assert_eq!(list_entries(&store).unwrap().len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found_and_changes_nothing() {
        let store = Store::open_in_memory().unwrap();
        seed(&store, "Stays", "a", at(2024, 1, 5, 9));

        assert!(matches!(
            delete_entry(&store, 999),
            Err(JournalError::EntryNotFound(999))
        ));
        assert_eq!(list_entries(&store).unwrap().len(), 1);
    }
}
