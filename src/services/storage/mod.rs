//! Key-value persistence.
//!
//! The holiday override and the last seen week live here as plain strings,
//! the same way a browser keeps them in local storage.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use crate::services::database::Database;

/// Key holding the JSON array of holiday dates.
pub const HOLIDAYS_KEY: &str = "wardiya_holidays";

/// Key holding the index of the last week the user was shown.
pub const LAST_SEEN_WEEK_KEY: &str = "wardiya_last_seen_week_index_v1";

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Store backed by the `kv_store` table.
pub struct SqliteStore<'a> {
    db: &'a Database,
}

impl<'a> SqliteStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db
            .connection()
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("Failed to read key {}", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                     updated_at = CURRENT_TIMESTAMP",
                (key, value),
            )
            .with_context(|| format!("Failed to write key {}", key))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.db
            .connection()
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .with_context(|| format!("Failed to delete key {}", key))?;

        Ok(())
    }
}

/// In-process store, used when no database is wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
