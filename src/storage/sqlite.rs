// Durable key-value storage over SQLite
use directories::ProjectDirs;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;
use crate::storage::Storage;

/// Durable key-value store backing ratings, reviews and the theme
/// preference. One open handle corresponds to one user session.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open or create the store at the default per-user location.
    pub fn open() -> Result<Self> {
        Self::open_at(&Self::default_path())
    }

    /// Open or create the store at the given path.
    pub fn open_at(path: &Path) -> Result<Self> {
        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let conn = Connection::open(path)?;

        // Enable WAL mode
        conn.pragma_update(None, "journal_mode", "WAL")?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;

        tracing::info!("opened storage at {}", path.display());

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Path to the store in the platform config directory.
    fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "cineplus", "CinePlus") {
            proj_dirs.config_dir().join("cineplus.db")
        } else {
            // Fallback to home directory
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cineplus.db")
        }
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Option<String> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1")
            .ok()?;

        stmt.query_row(params![key], |row| row.get(0)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
