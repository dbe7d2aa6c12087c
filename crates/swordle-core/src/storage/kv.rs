//! Raw key-value backends
//!
//! A `KeyValueStore` maps slot names to raw string values. It knows nothing
//! about types or defaults; that lives in [`StreakStore`](super::StreakStore).
//!
//! Two backends ship with the crate:
//! - `SqliteKeyValueStore` - durable, one row per slot in the `kv` table
//! - `MemoryKeyValueStore` - a `HashMap`, for tests and throwaway sessions

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection};
use tracing::debug;

use crate::config::Config;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::schema::{init_schema, needs_init};

/// Durable mapping from slot names to raw string values
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_raw(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// SQLite-backed key-value store
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Open or create the database described by the configuration
    pub fn open(config: &Config) -> StorageResult<Self> {
        Self::open_at(&config.database_path())
    }

    /// Open or create the database at a specific path
    pub fn open_at(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::from_io(e, parent.to_path_buf()))?;
        }

        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        if needs_init(&conn) {
            debug!("Initializing slot schema at {:?}", path);
            init_schema(&conn)?;
        }

        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_raw(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory key-value store
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots that have been written
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sqlite_get_missing() {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();
        assert!(store.get_raw("swordle-streak").unwrap().is_none());
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let mut store = SqliteKeyValueStore::open_in_memory().unwrap();
        store.set_raw("swordle-total", "1").unwrap();
        store.set_raw("swordle-total", "2").unwrap();

        assert_eq!(store.get_raw("swordle-total").unwrap().as_deref(), Some("2"));

        let rows: i64 = store
            .connection()
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_sqlite_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("swordle.db");

        {
            let mut store = SqliteKeyValueStore::open_at(&path).unwrap();
            store.set_raw("swordle-lastRead", "\"2024-01-10\"").unwrap();
        }

        let store = SqliteKeyValueStore::open_at(&path).unwrap();
        assert_eq!(
            store.get_raw("swordle-lastRead").unwrap().as_deref(),
            Some("\"2024-01-10\"")
        );
    }

    #[test]
    fn test_sqlite_open_with_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        };

        let mut store = SqliteKeyValueStore::open(&config).unwrap();
        store.set_raw("k", "v").unwrap();

        assert!(config.database_path().exists());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryKeyValueStore::new();
        assert!(store.is_empty());
        assert!(store.get_raw("test").unwrap().is_none());

        store.set_raw("test", "hello").unwrap();
        assert_eq!(store.get_raw("test").unwrap().as_deref(), Some("hello"));
        assert_eq!(store.len(), 1);
    }
}
