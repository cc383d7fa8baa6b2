//! Unit of work over the journal tables

use crate::domain::{Entry, NewEntry, Tag};
use crate::error::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Params, Row, Transaction};

/// Storage format for entry timestamps; sorts lexically in time order
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
const DATE_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const ENTRY_COLUMNS: &str = "e.id, e.title, e.content, e.date, e.is_private";

/// A transactional handle. Consumed by [`Session::commit`] or [`Session::rollback`];
/// dropping it uncommitted rolls back.
pub struct Session<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> Session<'conn> {
    pub(crate) fn new(tx: Transaction<'conn>) -> Self {
        Session { tx }
    }

    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }

    pub fn rollback(self) -> Result<()> {
        self.tx.rollback()?;
        Ok(())
    }
}

// Entries
impl Session<'_> {
    /// Insert a new entry and return its assigned id
    pub fn insert_entry(&self, draft: &NewEntry, date: NaiveDateTime) -> Result<i64> {
        self.tx.execute(
            "INSERT INTO entries (title, content, date, is_private) VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.title,
                draft.content,
                date.format(DATE_FORMAT).to_string(),
                draft.is_private,
            ],
        )?;
        Ok(self.tx.last_insert_rowid())
    }

    pub fn find_entry(&self, id: i64) -> Result<Option<Entry>> {
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM entries e WHERE e.id = ?1");
        let entry = self
            .tx
            .query_row(&sql, params![id], entry_from_row)
            .optional()?;

        match entry {
            Some(mut entry) => {
                entry.tags = self.tag_names_for_entry(entry.id)?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    /// All entries, newest first
    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        let sql =
            format!("SELECT {ENTRY_COLUMNS} FROM entries e ORDER BY e.date DESC, e.id DESC");
        self.query_entries(&sql, [])
    }

    /// Entries created on the given calendar day, newest first
    pub fn entries_on_date(&self, date: NaiveDate) -> Result<Vec<Entry>> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM entries e
             WHERE e.date LIKE ?1
             ORDER BY e.date DESC, e.id DESC"
        );
        let prefix = format!("{}%", date.format("%Y-%m-%d"));
        self.query_entries(&sql, params![prefix])
    }

    /// Entries whose title or content contains `keyword`, ignoring ASCII case
    pub fn entries_matching(&self, keyword: &str) -> Result<Vec<Entry>> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM entries e
             WHERE e.title LIKE ?1 ESCAPE '\\' OR e.content LIKE ?1 ESCAPE '\\'
             ORDER BY e.date DESC, e.id DESC"
        );
        let pattern = format!("%{}%", escape_like(keyword));
        self.query_entries(&sql, params![pattern])
    }

    pub fn entries_with_tag(&self, tag_id: i64) -> Result<Vec<Entry>> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM entries e
             JOIN entry_tag_association a ON a.entry_id = e.id
             WHERE a.tag_id = ?1
             ORDER BY e.date DESC, e.id DESC"
        );
        self.query_entries(&sql, params![tag_id])
    }

    /// Persist title, content and privacy of `entry`. The stored date is left alone.
    pub fn update_entry(&self, entry: &Entry) -> Result<()> {
        self.tx.execute(
            "UPDATE entries SET title = ?1, content = ?2, is_private = ?3 WHERE id = ?4",
            params![entry.title, entry.content, entry.is_private, entry.id],
        )?;
        Ok(())
    }

    /// Delete an entry and its join rows. Returns the number of tags detached.
    pub fn delete_entry(&self, id: i64) -> Result<usize> {
        let detached = self.tx.execute(
            "DELETE FROM entry_tag_association WHERE entry_id = ?1",
            params![id],
        )?;
        self.tx
            .execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        Ok(detached)
    }

    fn query_entries<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Entry>> {
        let mut stmt = self.tx.prepare(sql)?;
        let rows = stmt.query_map(params, entry_from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            let mut entry = row?;
            entry.tags = self.tag_names_for_entry(entry.id)?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Tag names held by an entry, in the order they were attached
    pub fn tag_names_for_entry(&self, entry_id: i64) -> Result<Vec<String>> {
        let mut stmt = self.tx.prepare(
            "SELECT t.name FROM tags t
             JOIN entry_tag_association a ON a.tag_id = t.id
             WHERE a.entry_id = ?1
             ORDER BY a.rowid",
        )?;
        let rows = stmt.query_map(params![entry_id], |row| row.get(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }
}

// Tags
impl Session<'_> {
    pub fn find_tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        let tag = self
            .tx
            .query_row(
                "SELECT id, name FROM tags WHERE name = ?1",
                params![name],
                tag_from_row,
            )
            .optional()?;
        Ok(tag)
    }

    pub fn find_tag_by_id(&self, id: i64) -> Result<Option<Tag>> {
        let tag = self
            .tx
            .query_row(
                "SELECT id, name FROM tags WHERE id = ?1",
                params![id],
                tag_from_row,
            )
            .optional()?;
        Ok(tag)
    }

    /// Insert a tag with an already-normalized name
    pub fn insert_tag(&self, name: &str) -> Result<Tag> {
        self.tx
            .execute("INSERT INTO tags (name) VALUES (?1)", params![name])?;
        Ok(Tag {
            id: self.tx.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Every tag with the number of entries holding it, sorted by name
    pub fn list_tags_with_counts(&self) -> Result<Vec<(Tag, usize)>> {
        let mut stmt = self.tx.prepare(
            "SELECT t.id, t.name, COUNT(a.entry_id) FROM tags t
             LEFT JOIN entry_tag_association a ON a.tag_id = t.id
             GROUP BY t.id, t.name
             ORDER BY t.name",
        )?;
        let rows = stmt.query_map([], |row| {
            let count: i64 = row.get(2)?;
            Ok((tag_from_row(row)?, count as usize))
        })?;

        let mut tags = Vec::new();
        for row in rows {
            tags.push(row?);
        }
        Ok(tags)
    }

    /// Delete a tag and its join rows; entries are untouched. Returns entries detached.
    pub fn delete_tag(&self, id: i64) -> Result<usize> {
        let detached = self.tx.execute(
            "DELETE FROM entry_tag_association WHERE tag_id = ?1",
            params![id],
        )?;
        self.tx
            .execute("DELETE FROM tags WHERE id = ?1", params![id])?;
        Ok(detached)
    }

    pub fn entry_has_tag(&self, entry_id: i64, tag_id: i64) -> Result<bool> {
        let found = self
            .tx
            .query_row(
                "SELECT 1 FROM entry_tag_association WHERE entry_id = ?1 AND tag_id = ?2",
                params![entry_id, tag_id],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn attach_tag(&self, entry_id: i64, tag_id: i64) -> Result<()> {
        self.tx.execute(
            "INSERT INTO entry_tag_association (entry_id, tag_id) VALUES (?1, ?2)",
            params![entry_id, tag_id],
        )?;
        Ok(())
    }

    pub fn detach_tag(&self, entry_id: i64, tag_id: i64) -> Result<bool> {
        let removed = self.tx.execute(
            "DELETE FROM entry_tag_association WHERE entry_id = ?1 AND tag_id = ?2",
            params![entry_id, tag_id],
        )?;
        Ok(removed > 0)
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let raw_date: String = row.get(3)?;
    let date = NaiveDateTime::parse_from_str(&raw_date, DATE_PARSE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        date,
        is_private: row.get(4)?,
        tags: Vec::new(),
    })
}

fn tag_from_row(row: &Row<'_>) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Escape `%`, `_` and `\` for a `LIKE ... ESCAPE '\'` pattern
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
