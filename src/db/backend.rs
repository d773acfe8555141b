//! Key-value substrates for the record store.
//!
//! Every backend maps a string key to a serialized JSON document. Writes go
//! through [`KvBackend::set_many`], which applies all entries or none of them.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use clap::ValueEnum;
use rusqlite::{OptionalExtension, params};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub trait KvBackend {
    /// Read the value stored under `key`; `None` when the key was never written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write every entry, or none of them if any write fails.
    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()>;

    fn set(&mut self, key: &str, value: String) -> AppResult<()> {
        self.set_many(&[(key, value)])
    }

    /// All keys currently stored, sorted.
    fn keys(&self) -> AppResult<Vec<String>>;

    /// Human readable location, used by `db --info`.
    fn describe(&self) -> String;
}

impl<B: KvBackend + ?Sized> KvBackend for Box<B> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()> {
        (**self).set_many(entries)
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        (**self).keys()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Storage flavours selectable from the config file or `--backend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Sqlite,
    Json,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Sqlite => "sqlite",
            BackendKind::Json => "json",
        }
    }

    /// Guess the backend from a storage file extension.
    pub fn from_path(path: &str) -> Option<Self> {
        match Path::new(path).extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(BackendKind::Json),
            "sqlite" | "sqlite3" | "db" => Some(BackendKind::Sqlite),
            _ => None,
        }
    }
}

/// Open the backend of the given kind on `path`.
pub fn open_backend(kind: BackendKind, path: &str) -> AppResult<Box<dyn KvBackend>> {
    debug!(backend = kind.as_str(), path, "opening storage backend");
    match kind {
        BackendKind::Sqlite => Ok(Box::new(SqliteBackend::open(path)?)),
        BackendKind::Json => Ok(Box::new(JsonFileBackend::new(path))),
    }
}

// ---------------------------------------------------------------------------
// SQLite
// ---------------------------------------------------------------------------

/// Key-value rows in the `kv_store` table of a SQLite file.
pub struct SqliteBackend {
    pool: DbPool,
    path: String,
}

impl SqliteBackend {
    pub fn open(path: &str) -> AppResult<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let pool = DbPool::open(path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            path: path.to_string(),
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            path: ":memory:".to_string(),
        })
    }

    pub fn pool_mut(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl KvBackend for SqliteBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value: Option<String> = stmt.query_row([key], |row| row.get(0)).optional()?;
        trace!(key, found = value.is_some(), "sqlite get");
        Ok(value)
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()> {
        let now = Local::now().to_rfc3339();

        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            for (key, value) in entries {
                tx.execute(
                    "INSERT INTO kv_store (key, value, updated_at)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE SET
                        value = excluded.value,
                        updated_at = excluded.updated_at",
                    params![key, value, now],
                )?;
            }
            tx.commit()
        })?;

        debug!(keys = entries.len(), "sqlite write committed");
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT key FROM kv_store ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

/// A single JSON object file: `{ "<key>": <document>, ... }`.
///
/// Values must be JSON documents. The file is rewritten through a temporary
/// sibling and renamed into place, so a crash never leaves it half-written.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> AppResult<BTreeMap<String, serde_json::Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write_map(&self, map: &BTreeMap<String, serde_json::Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(map)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KvBackend for JsonFileBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let map = self.read_map()?;
        Ok(map.get(key).map(|v| v.to_string()))
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()> {
        let mut map = self.read_map()?;
        for (key, value) in entries {
            let doc: serde_json::Value = serde_json::from_str(value)?;
            map.insert(key.to_string(), doc);
        }
        self.write_map(&map)?;

        debug!(keys = entries.len(), path = %self.path.display(), "json file rewritten");
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.read_map()?.into_keys().collect())
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// HashMap-backed store for tests and dry runs.
///
/// An optional byte quota (keys + values) emulates a storage that refuses
/// writes once full.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    fn used_bytes_after(&self, entries: &[(&str, String)]) -> usize {
        let mut sizes: HashMap<&str, usize> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), k.len() + v.len()))
            .collect();
        for (key, value) in entries {
            sizes.insert(*key, key.len() + value.len());
        }
        sizes.values().sum()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_after(entries);
            if needed > quota {
                let key = entries.first().map(|(k, _)| k.to_string()).unwrap_or_default();
                return Err(AppError::StorageFull {
                    key,
                    needed,
                    available: quota,
                });
            }
        }

        for (key, value) in entries {
            self.entries.insert(key.to_string(), value.clone());
        }
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
