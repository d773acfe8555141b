use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

/// Name of the single table backing the key-value store.
pub const KV_TABLE: &str = "kv_store";

/// Initialize the database.
///
/// The schema is a single key/value table; every collection lives in one row
/// as serialized JSON text.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the key-value table exists.
pub fn kv_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([KV_TABLE], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
