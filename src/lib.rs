//! journo - Terminal journal application
//!
//! A menu-driven journal backed by SQLite. Entries carry a title, content,
//! creation timestamp and privacy flag, and can be labelled with any number of tags.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalError;
