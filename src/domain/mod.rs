//! Domain layer - Journal models and input parsing

pub mod entry;
pub mod search;
pub mod tag;
pub mod tag_delta;

pub use entry::{Entry, EntryUpdate, NewEntry};
pub use search::SearchQuery;
pub use tag::{normalize_tag_name, Tag, TagSelector};
pub use tag_delta::{TagDelta, TagDeltaReport};
