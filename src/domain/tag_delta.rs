//! Tag delta strings: `+name` adds, `-name` removes, a bare name adds.

use super::tag::normalize_tag_name;

/// Parsed tag delta with each direction de-duplicated on the normalized name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDelta {
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

impl TagDelta {
    /// Parse a comma-separated delta string such as `"+work, -draft, travel"`.
    ///
    /// Empty tokens are ignored. Order of first occurrence is preserved.
    pub fn parse(input: &str) -> Self {
        let mut delta = TagDelta::default();

        for token in input.split(',') {
            let token = token.trim();
            let (target, raw) = if let Some(rest) = token.strip_prefix('+') {
                (&mut delta.add, rest)
            } else if let Some(rest) = token.strip_prefix('-') {
                (&mut delta.remove, rest)
            } else {
                (&mut delta.add, token)
            };

            let name = normalize_tag_name(raw);
            if name.is_empty() || target.contains(&name) {
                continue;
            }
            target.push(name);
        }

        delta
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Outcome of applying a [`TagDelta`] to one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDeltaReport {
    /// Tags newly attached to the entry
    pub added: Vec<String>,
    /// Tags that did not exist and were created on the way
    pub created: Vec<String>,
    pub already_attached: Vec<String>,
    pub removed: Vec<String>,
    /// Existing tags the entry did not hold
    pub not_attached: Vec<String>,
    /// Names with no matching tag at all
    pub unknown: Vec<String>,
}

impl TagDeltaReport {
    pub fn changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}
