//! Key-value persistence for the event collection.
//!
//! The whole collection lives as one JSON array under a single string key.
//! `KeyValueStore` is the storage seam; `SqliteStore` backs it with the
//! application database and `MemoryStore` keeps everything in memory.

use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

use crate::models::event::Event;
use crate::services::database::Database;

/// Key the event collection is stored under
pub const EVENTS_KEY: &str = "EVENTS";

/// String-keyed persistent store
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// `KeyValueStore` backed by the `kv_store` table
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            conn: db.connection(),
        }
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("Failed to read key {}", key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value],
            )
            .with_context(|| format!("Failed to write key {}", key))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .with_context(|| format!("Failed to remove key {}", key))?;
        Ok(())
    }
}

/// In-memory `KeyValueStore`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, as if a previous session had written it
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read '{key}' from storage")]
    Read {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("Stored data under '{key}' is corrupt")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write '{key}' to storage")]
    Write {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("Failed to serialize events")]
    Serialize(#[source] serde_json::Error),
}

/// Loads and saves the event collection under one key
pub struct EventRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> EventRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, EVENTS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key a corrupt blob is copied to before it gets overwritten
    pub fn corrupt_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the collection; an absent key is an empty collection
    pub fn load(&self) -> Result<Vec<Event>, StorageError> {
        let raw = self
            .store
            .get(&self.key)
            .map_err(|source| StorageError::Read {
                key: self.key.clone(),
                source,
            })?;

        let Some(raw) = raw else {
            log::info!("No stored events under '{}', starting empty", self.key);
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: self.key.clone(),
            source,
        })
    }

    /// Write the full collection
    pub fn save(&mut self, events: &[Event]) -> Result<(), StorageError> {
        let json = serde_json::to_string(events).map_err(StorageError::Serialize)?;
        self.store
            .set(&self.key, &json)
            .map_err(|source| StorageError::Write {
                key: self.key.clone(),
                source,
            })?;
        log::debug!("Persisted {} events under '{}'", events.len(), self.key);
        Ok(())
    }

    /// Copy whatever is stored under the key to `corrupt_key()`
    pub fn quarantine(&mut self) -> Result<(), StorageError> {
        let raw = self
            .store
            .get(&self.key)
            .map_err(|source| StorageError::Read {
                key: self.key.clone(),
                source,
            })?;

        if let Some(raw) = raw {
            let corrupt_key = self.corrupt_key();
            self.store
                .set(&corrupt_key, &raw)
                .map_err(|source| StorageError::Write {
                    key: corrupt_key.clone(),
                    source,
                })?;
            log::warn!("Copied unreadable '{}' data to '{}'", self.key, corrupt_key);
        }
        Ok(())
    }
}
