//! Tag model and name normalization

use crate::error::{JournalError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Normalize a tag name: trim, uppercase the first character, keep the rest as typed.
pub fn normalize_tag_name(input: &str) -> String {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// How the user identified a tag to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSelector {
    /// Numeric input: looked up as an id first, then as a name
    IdOrName { id: i64, name: String },
    Name(String),
}

impl TagSelector {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(JournalError::EmptyField("Tag name or ID"));
        }

        let name = normalize_tag_name(trimmed);
        Ok(match trimmed.parse::<i64>() {
            Ok(id) => TagSelector::IdOrName { id, name },
            Err(_) => TagSelector::Name(name),
        })
    }

    /// The normalized name this selector falls back to
    pub fn name(&self) -> &str {
        match self {
            TagSelector::IdOrName { name, .. } => name,
            TagSelector::Name(name) => name,
        }
    }
}
