//! Journal entry model

use crate::error::{JournalError, Result};
use chrono::NaiveDateTime;

/// A stored journal entry together with the names of its tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub is_private: bool,
    /// Tag names in the order they were attached
    pub tags: Vec<String>,
}

/// Validated input for a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub is_private: bool,
}

impl NewEntry {
    /// Build a private entry draft. Title and content are trimmed and must not be empty.
    pub fn new(title: &str, content: &str) -> Result<Self> {
        let title = non_blank(title).ok_or(JournalError::EmptyField("Title"))?;
        let content = non_blank(content).ok_or(JournalError::EmptyField("Content"))?;

        Ok(NewEntry {
            title,
            content,
            is_private: true,
        })
    }

    pub fn with_privacy(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }
}

/// Partial update of an entry. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_private: Option<bool>,
}

impl EntryUpdate {
    /// Build an update from raw prompt answers.
    ///
    /// A blank title or content means "keep current"; there is no way to clear a field.
    pub fn from_input(title: &str, content: &str, is_private: Option<bool>) -> Self {
        EntryUpdate {
            title: non_blank(title),
            content: non_blank(content),
            is_private,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.is_private.is_none()
    }

    /// Apply the supplied fields to `entry`. The date is never touched.
    pub fn apply_to(&self, entry: &mut Entry) {
        if let Some(title) = &self.title {
            entry.title = title.clone();
        }
        if let Some(content) = &self.content {
            entry.content = content.clone();
        }
        if let Some(is_private) = self.is_private {
            entry.is_private = is_private;
        }
    }
}

fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
