//! Todo persistence.
//!
//! One async contract, two backends. The backend is picked once at startup
//! from `store.backend` and shared as `Arc<dyn TodoStore>`.

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use todoapi_core::error::Result;
use todoapi_core::{Todo, TodoId};

use crate::config::{StoreBackend, StoreSection};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage contract shared by every backend.
///
/// Each call resolves to exactly one outcome. Backend faults surface as
/// `TodoError::Internal`; a missing id is `Ok(false)`, not an error.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// All records in stable order.
    async fn list(&self) -> Result<Vec<Todo>>;

    /// Persist a new record under the next unused id.
    async fn create(&self, text: String, is_complete: bool) -> Result<Todo>;

    /// Overwrite `text` and `is_complete`. Returns whether the id existed.
    async fn update(&self, id: TodoId, text: String, is_complete: bool) -> Result<bool>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: TodoId) -> Result<bool>;
}

/// Build the configured backend.
pub fn open_store(cfg: &StoreSection) -> Result<Arc<dyn TodoStore>> {
    let store: Arc<dyn TodoStore> = match cfg.backend {
        StoreBackend::Memory if cfg.seed => Arc::new(MemoryStore::seeded()),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Sqlite => Arc::new(SqliteStore::open(&cfg.path, cfg.seed)?),
    };
    Ok(store)
}
