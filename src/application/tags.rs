//! Tag use cases: create, delete, list and browse by tag

use crate::domain::{normalize_tag_name, Entry, Tag, TagSelector};
use crate::error::{JournalError, Result};
use crate::infrastructure::{Session, Store};
use tracing::info;

/// Result of a create request. An existing tag is informational, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCreation {
    Created(Tag),
    AlreadyExists(Tag),
}

impl TagCreation {
    pub fn tag(&self) -> &Tag {
        match self {
            TagCreation::Created(tag) | TagCreation::AlreadyExists(tag) => tag,
        }
    }
}

/// A removed tag and the number of entries it was detached from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedTag {
    pub tag: Tag,
    pub detached: usize,
}

pub fn create_tag(store: &Store, name: &str) -> Result<TagCreation> {
    let name = normalize_tag_name(name);
    if name.is_empty() {
        return Err(JournalError::EmptyField("Tag name"));
    }

    let creation = store.with_session(|session| match session.find_tag_by_name(&name)? {
        Some(tag) => Ok(TagCreation::AlreadyExists(tag)),
        None => Ok(TagCreation::Created(session.insert_tag(&name)?)),
    })?;

    if let TagCreation::Created(tag) = &creation {
        info!(tag_id = tag.id, name = %tag.name, "tag created");
    }
    Ok(creation)
}

/// Resolve a tag by id or name without changing anything
pub fn find_tag(store: &Store, selector: &TagSelector) -> Result<Tag> {
    store.with_session(|session| lookup(session, selector))
}

/// Delete a tag and detach it from every entry. Entries are kept.
pub fn delete_tag(store: &Store, selector: &TagSelector) -> Result<DeletedTag> {
    let deleted = store.with_session(|session| {
        let tag = lookup(session, selector)?;
        let detached = session.delete_tag(tag.id)?;
        Ok(DeletedTag { tag, detached })
    })?;

    info!(
        tag_id = deleted.tag.id,
        name = %deleted.tag.name,
        detached = deleted.detached,
        "tag deleted"
    );
    Ok(deleted)
}

/// The tag named `name` and every entry holding it, newest first
pub fn entries_by_tag(store: &Store, name: &str) -> Result<(Tag, Vec<Entry>)> {
    let name = normalize_tag_name(name);
    if name.is_empty() {
        return Err(JournalError::EmptyField("Tag name"));
    }

    store.with_session(|session| {
        let tag = session
            .find_tag_by_name(&name)?
            .ok_or_else(|| JournalError::TagNotFound(name.clone()))?;
        let entries = session.entries_with_tag(tag.id)?;
        Ok((tag, entries))
    })
}

/// Every tag with its entry count, sorted by name
pub fn list_tags(store: &Store) -> Result<Vec<(Tag, usize)>> {
    store.with_session(|session| session.list_tags_with_counts())
}

fn lookup(session: &Session<'_>, selector: &TagSelector) -> Result<Tag> {
    let by_id = match selector {
        TagSelector::IdOrName { id, .. } => session.find_tag_by_id(*id)?,
        TagSelector::Name(_) => None,
    };

    match by_id {
        Some(tag) => Ok(tag),
        None => session
            .find_tag_by_name(selector.name())?
            .ok_or_else(|| JournalError::TagNotFound(selector.name().to_string())),
    }
}
