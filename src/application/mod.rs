//! Application layer - One use case per user action

pub mod create_entry;
pub mod delete_entry;
pub mod manage_tags;
pub mod search_entries;
pub mod tags;
pub mod update_entry;
pub mod view_entries;

pub use create_entry::{create_entry, create_entry_at};
pub use delete_entry::delete_entry;
pub use manage_tags::apply_tag_delta;
pub use search_entries::search_entries;
pub use tags::{
    create_tag, delete_tag, entries_by_tag, find_tag, list_tags, DeletedTag, TagCreation,
};
pub use update_entry::update_entry;
pub use view_entries::{get_entry, list_entries};
