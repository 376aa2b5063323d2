// Key-value storage backends
mod sqlite;

pub use sqlite::SqliteStorage;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

/// Key-value storage capability.
///
/// Ratings, reviews and the theme preference all persist through this
/// interface, so the durable SQLite backend and the in-memory map are
/// interchangeable. Reads and writes are synchronous; absence is `None`.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/storage_tests.rs"]
mod tests;
