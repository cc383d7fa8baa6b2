//! SQLite-backed journal store

use crate::error::Result;
use crate::infrastructure::Session;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        date TEXT NOT NULL,
        is_private INTEGER NOT NULL DEFAULT 1
    );

    CREATE TABLE IF NOT EXISTS tags (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE IF NOT EXISTS entry_tag_association (
        entry_id INTEGER NOT NULL REFERENCES entries(id) ON DELETE CASCADE,
        tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
        PRIMARY KEY (entry_id, tag_id)
    );

    CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
    CREATE INDEX IF NOT EXISTS idx_entry_tag_association_tag ON entry_tag_association(tag_id);
";

/// Handle to the journal database, opened once at startup and passed to every operation.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the store at `path` and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let store = Store {
            conn: Connection::open(path)?,
        };
        store.initialize()?;

        debug!(path = %path.display(), "opened journal store");
        Ok(store)
    }

    /// In-memory store, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let store = Store {
            conn: Connection::open_in_memory()?,
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Begin a unit of work. Dropping the session without committing rolls it back.
    pub fn session(&self) -> Result<Session<'_>> {
        Ok(Session::new(self.conn.unchecked_transaction()?))
    }

    /// Run `work` in its own session: commit on `Ok`, explicit rollback on `Err`.
    pub fn with_session<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&Session<'_>) -> Result<T>,
    {
        let session = self.session()?;

        match work(&session) {
            Ok(value) => {
                session.commit()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = session.rollback() {
                    warn!(error = %rollback_err, "rollback failed");
                } else {
                    debug!(error = %err, "unit of work rolled back");
                }
                Err(err)
            }
        }
    }
}
