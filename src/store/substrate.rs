// src/store/substrate.rs
//! Durable key-value substrate.
//!
//! The substrate is the unit of durability: a synchronous, string-keyed,
//! string-valued medium with no knowledge of JSON or domain types. Failures
//! never cross this boundary; a failed write leaves the prior durable state
//! unchanged and the in-memory collection stays authoritative.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tracing::warn;

use crate::error::Result;

pub trait Substrate {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str);
}

/// SQLite-backed substrate: one `kv` table in a single database file.
pub struct SqliteSubstrate {
    conn: Connection,
}

impl SqliteSubstrate {
    /// Open (or create) the backing database file.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

impl Substrate for SqliteSubstrate {
    fn get(&self, key: &str) -> Option<String> {
        let row = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional();

        match row {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "substrate read failed");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let result = self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            [key, value],
        );
        if let Err(e) = result {
            warn!(key, error = %e, "substrate write failed");
        }
    }
}

/// In-memory substrate for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySubstrate {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySubstrate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Substrate for MemorySubstrate {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_substrate_roundtrip() {
        let substrate = MemorySubstrate::new();
        assert_eq!(substrate.get("k"), None);

        substrate.set("k", "v1");
        assert_eq!(substrate.get("k"), Some("v1".to_string()));

        substrate.set("k", "v2");
        assert_eq!(substrate.get("k"), Some("v2".to_string()));
    }

    #[test]
    fn test_sqlite_substrate_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let substrate = SqliteSubstrate::open(&tmp.path().join("kv.db")).unwrap();

        assert_eq!(substrate.get("life:tasks"), None);
        substrate.set("life:tasks", "[]");
        assert_eq!(substrate.get("life:tasks"), Some("[]".to_string()));
    }

    #[test]
    fn test_sqlite_substrate_persists_across_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("kv.db");

        {
            let substrate = SqliteSubstrate::open(&path).unwrap();
            substrate.set("k", "durable");
        }

        let substrate = SqliteSubstrate::open(&path).unwrap();
        assert_eq!(substrate.get("k"), Some("durable".to_string()));
    }

    #[test]
    fn test_sqlite_substrate_replaces_value() {
        let tmp = TempDir::new().unwrap();
        let substrate = SqliteSubstrate::open(&tmp.path().join("kv.db")).unwrap();

        substrate.set("k", "first");
        substrate.set("k", "second");
        assert_eq!(substrate.get("k"), Some("second".to_string()));
    }
}
