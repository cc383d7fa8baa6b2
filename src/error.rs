//! Error types for journo

use thiserror::Error;

/// Main error type for journo
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("Entry with ID {0} not found")]
    EntryNotFound(i64),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::EmptyField(_)
            | JournalError::InvalidDate(_)
            | JournalError::InvalidId(_) => 2,
            JournalError::EntryNotFound(_) | JournalError::TagNotFound(_) => 4,
            _ => 1,
        }
    }

    /// True for errors caused by malformed user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            JournalError::EmptyField(_) | JournalError::InvalidDate(_) | JournalError::InvalidId(_)
        )
    }

    /// True for unknown entry ids or tag names
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            JournalError::EntryNotFound(_) | JournalError::TagNotFound(_)
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: 2024-01-05",
                    input
                )
            }
            JournalError::InvalidId(input) => {
                format!("Invalid ID: '{}'. Please enter a number.", input)
            }
            JournalError::EntryNotFound(id) => {
                format!(
                    "Entry with ID {} not found.\n\n\
                    Suggestions:\n\
                    • Use 'View All Entries' to see existing IDs\n\
                    • Search by keyword or date to locate the entry",
                    id
                )
            }
            JournalError::TagNotFound(tag) => {
                format!(
                    "Tag not found: '{}'\n\n\
                    Suggestions:\n\
                    • Tag names are matched with the first letter capitalized\n\
                    • Use 'Create New Tag' or 'Manage Tags for Entry' to add it",
                    tag
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_message() {
        let err = JournalError::EmptyField("Title");
        assert_eq!(err.to_string(), "Title cannot be empty");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_date_suggestions() {
        let err = JournalError::InvalidDate("05/01/2024".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("05/01/2024"));
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = JournalError::EntryNotFound(42);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("ID 42"));
        assert!(msg.contains("View All Entries"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_tag_not_found_suggestions() {
        let err = JournalError::TagNotFound("Work".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'Work'"));
        assert!(msg.contains("capitalized"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(JournalError::InvalidId("x".to_string()).exit_code(), 2);
        assert_eq!(JournalError::EntryNotFound(1).exit_code(), 4);
        let io = JournalError::Io(std::io::Error::other("boom"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_store_error_fallback() {
        let err = JournalError::Store(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.display_with_suggestions().starts_with("Store error:"));
    }
}
