//! Tag delta use case: attach and detach tags on one entry

use crate::domain::{TagDelta, TagDeltaReport};
use crate::error::{JournalError, Result};
use crate::infrastructure::Store;
use tracing::info;

/// Apply a parsed delta to an entry in one unit of work.
///
/// All additions run first, then all removals. Missing tags are created on add.
/// Re-adding an attached tag or removing an absent one is reported, not an error.
pub fn apply_tag_delta(store: &Store, entry_id: i64, delta: &TagDelta) -> Result<TagDeltaReport> {
    let report = store.with_session(|session| {
        if session.find_entry(entry_id)?.is_none() {
            return Err(JournalError::EntryNotFound(entry_id));
        }

        let mut report = TagDeltaReport::default();

        for name in &delta.add {
            let tag = match session.find_tag_by_name(name)? {
                Some(tag) => tag,
                None => {
                    let tag = session.insert_tag(name)?;
                    report.created.push(tag.name.clone());
                    tag
                }
            };

            if session.entry_has_tag(entry_id, tag.id)? {
                report.already_attached.push(tag.name);
            } else {
                session.attach_tag(entry_id, tag.id)?;
                report.added.push(tag.name);
            }
        }

        for name in &delta.remove {
            match session.find_tag_by_name(name)? {
                Some(tag) => {
                    if session.detach_tag(entry_id, tag.id)? {
                        report.removed.push(tag.name);
                    } else {
                        report.not_attached.push(tag.name);
                    }
                }
                None => report.unknown.push(name.clone()),
            }
        }

        Ok(report)
    })?;

    info!(
        entry_id,
        added = report.added.len(),
        removed = report.removed.len(),
        created = report.created.len(),
        "tag delta applied"
    );
    Ok(report)
}
