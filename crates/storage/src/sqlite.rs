//! Storage backed by a single SQLite table.
//!
//! Uses WAL mode so a reader (e.g. a second CLI invocation) never blocks on
//! the writer.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::{KeyValueStore, Result};

const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Key-value storage in a `kv` table with per-entry update timestamps.
pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").field("path", &self.path).finish()
    }
}

impl SqliteStore {
    /// Open or create the database at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&path)?;
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA busy_timeout=5000;",
        )?;

        let mut store = Self { conn, path };
        store.initialize_schema()?;
        debug!(path = %store.path.display(), "opened sqlite storage");

        Ok(store)
    }

    /// Open a private in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self {
            conn,
            path: PathBuf::from(":memory:"),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When `key` was last written, as an RFC 3339 timestamp.
    pub fn updated_at(&self, key: &str) -> Result<Option<String>> {
        let ts = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }

    fn initialize_schema(&mut self) -> Result<()> {
        let version: i32 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version < CURRENT_SCHEMA_VERSION {
            let tx = self.conn.transaction()?;
            tx.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS kv (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                "#,
            )?;
            tx.execute_batch(&format!("PRAGMA user_version = {CURRENT_SCHEMA_VERSION};"))?;
            tx.commit()?;
        }

        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    fn clear(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM kv", [])?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_value() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.keys().unwrap(), vec!["theme"]);
    }

    #[test]
    fn updated_at_is_recorded() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.updated_at("language").unwrap(), None);

        store.set("language", "en").unwrap();
        let ts = store.updated_at("language").unwrap().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn remove_and_clear() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);

        store.clear().unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn reopening_file_keeps_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");

        let mut store = SqliteStore::open(&path).unwrap();
        store.set("language", "ar").unwrap();
        drop(store);

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.get("language").unwrap().as_deref(), Some("ar"));
    }
}
