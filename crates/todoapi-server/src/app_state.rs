//! Shared application state.
//!
//! Built once at startup: config, the selected store, the metrics registry
//! and the request logger. Cloning is cheap (one `Arc`).

use std::sync::Arc;
use std::time::Duration;

use todoapi_core::error::Result;

use crate::config::TodoApiConfig;
use crate::obs::{ApiMetrics, RequestLogger};
use crate::store::{self, TodoStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: TodoApiConfig,
    store: Arc<dyn TodoStore>,
    metrics: ApiMetrics,
    logger: RequestLogger,
}

impl AppState {
    /// Build application state, opening the configured store.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: TodoApiConfig) -> Result<Self> {
        let store = store::open_store(&cfg.store)?;
        Ok(Self::with_store(cfg, store))
    }

    /// Build state around an already opened store.
    pub fn with_store(cfg: TodoApiConfig, store: Arc<dyn TodoStore>) -> Self {
        let logger = RequestLogger::new(Duration::from_millis(cfg.server.slow_request_ms));
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                metrics: ApiMetrics::new(),
                logger,
            }),
        }
    }

    pub fn cfg(&self) -> &TodoApiConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn TodoStore {
        self.inner.store.as_ref()
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }

    pub fn logger(&self) -> &RequestLogger {
        &self.inner.logger
    }
}
