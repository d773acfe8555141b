pub mod backend;
pub mod check;
pub mod initialize;
pub mod pool;
pub mod stats;
pub mod store;

pub use backend::{BackendKind, JsonFileBackend, KvBackend, MemoryBackend, SqliteBackend};
pub use store::RecordStore;

use crate::config::Config;
use crate::errors::AppResult;

/// Record store over whichever backend the configuration selects.
pub type AppStore = RecordStore<Box<dyn KvBackend>>;

/// Open the record store described by `cfg`.
pub fn open_store(cfg: &Config) -> AppResult<AppStore> {
    let backend = backend::open_backend(cfg.backend, &cfg.database)?;
    Ok(RecordStore::new(backend))
}
