use rusqlite::{Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Durable string storage addressed by key.
///
/// The shortlist only needs `get_item`/`set_item`; keeping it behind a trait
/// lets tests swap in stores that fail on purpose.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// SQLite-backed key-value store.
pub struct Storage {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl Storage {
    /// Open the store at the default location.
    ///
    /// The database file is created in the user's data directory:
    /// - Linux: ~/.local/share/wedding-studios/wedding_studios.db
    /// - macOS: ~/Library/Application Support/wedding-studios/wedding_studios.db
    /// - Windows: %APPDATA%\wedding-studios\wedding_studios.db
    pub fn open_default() -> Result<Self> {
        let db_path = Self::default_db_path().ok_or(Error::NoDataDir)?;
        Self::open(&db_path)
    }

    /// Open or create the store at `path`
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        tracing::info!("📁 Storage opened at {}", path.display());

        let storage = Storage {
            conn,
            db_path: Some(path.to_path_buf()),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Non-persistent SQLite store
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let storage = Storage {
            conn: Connection::open_in_memory()?,
            db_path: None,
        };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Get the path where the database should be stored
    pub fn default_db_path() -> Option<PathBuf> {
        let mut path = dirs::data_dir().or_else(dirs::home_dir)?;
        path.push("wedding-studios");
        path.push("wedding_studios.db");
        Some(path)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Get the path to the database file (`None` when in memory)
    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }
}

impl KeyValueStore for Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("db_path", &self.db_path)
            .finish()
    }
}

/// Process-local store used when the database cannot be opened.
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
