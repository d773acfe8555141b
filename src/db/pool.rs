//! Single SQLite connection shared by the storage backend.

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the SQLite file at `path`.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Run `func` with the connection borrowed mutably (transactions need it).
    pub fn with_conn<F, T>(&mut self, func: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        func(&mut self.conn)
    }
}
