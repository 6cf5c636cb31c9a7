//! SQLite-backed slot.
//!
//! Tables:
//! - `kv`: key, value, updated_at

use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::traits::DurableSlot;

pub struct SqliteSlot {
    conn: Mutex<rusqlite::Connection>,
}

impl SqliteSlot {
    /// Open (or create) the slot database at the given path.
    pub fn new(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create slot directory {}", parent.display())
                })?;
            }
        }
        let conn = rusqlite::Connection::open(db_path)
            .with_context(|| format!("Failed to open slot database {}", db_path.display()))?;
        Self::init(conn)
    }

    /// Purely in-memory database, mostly for tests.
    pub fn in_memory() -> Result<Self> {
        Self::init(rusqlite::Connection::open_in_memory()?)
    }

    fn init(conn: rusqlite::Connection) -> Result<Self> {
        // WAL mode for crash safety; ignored for in-memory databases
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl DurableSlot for SqliteSlot {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let row = conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            rusqlite::params![key],
            |row| row.get::<_, String>(0),
        );

        match row {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = epoch_secs() as i64;
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            rusqlite::params![key, value, now],
        )?;
        tracing::debug!(key, "Slot value written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM kv WHERE key = ?1", rusqlite::params![key])?;
        Ok(())
    }
}

/// Current Unix epoch in seconds.
fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_slot() -> (TempDir, SqliteSlot) {
        let tmp = TempDir::new().unwrap();
        let db_path = tmp.path().join("session.db");
        let slot = SqliteSlot::new(&db_path).unwrap();
        (tmp, slot)
    }

    #[test]
    fn set_and_get() {
        let (_tmp, slot) = test_slot();

        assert!(slot.get("workperk_user").unwrap().is_none());
        slot.set("workperk_user", "first").unwrap();
        assert_eq!(slot.get("workperk_user").unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn set_replaces_on_conflict() {
        let (_tmp, slot) = test_slot();

        slot.set("k", "old").unwrap();
        slot.set("k", "new").unwrap();
        assert_eq!(slot.get("k").unwrap().as_deref(), Some("new"));

        let conn = slot.conn.lock();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let (_tmp, slot) = test_slot();

        slot.set("k", "v").unwrap();
        slot.remove("k").unwrap();
        slot.remove("k").unwrap();
        assert!(slot.get("k").unwrap().is_none());
    }

    #[test]
    fn values_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        let db_path = tmp.path().join("nested").join("session.db");
        {
            let slot = SqliteSlot::new(&db_path).unwrap();
            slot.set("k", "persisted").unwrap();
        }
        let slot = SqliteSlot::new(&db_path).unwrap();
        assert_eq!(slot.get("k").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn in_memory_works() {
        let slot = SqliteSlot::in_memory().unwrap();
        slot.set("k", "v").unwrap();
        assert_eq!(slot.get("k").unwrap().as_deref(), Some("v"));
    }
}
