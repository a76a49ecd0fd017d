use std::net::SocketAddr;

use serde::Deserialize;
use todoapi_core::error::{Result, TodoError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoApiConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for TodoApiConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            store: StoreSection::default(),
            log: LogSection::default(),
        }
    }
}

impl TodoApiConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TodoError::Validation(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.store.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Completions slower than this also log a warning.
    #[serde(default = "default_slow_request_ms")]
    pub slow_request_ms: u64,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            slow_request_ms: default_slow_request_ms(),
            max_body_bytes: default_max_body_bytes(),
            cors: default_cors(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1..=600_000).contains(&self.slow_request_ms) {
            return Err(TodoError::Validation(
                "server.slow_request_ms must be between 1 and 600000".into(),
            ));
        }
        if !(1..=16 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(TodoError::Validation(
                "server.max_body_bytes must be between 1 and 16777216".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            TodoError::Validation(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_slow_request_ms() -> u64 {
    2000
}
fn default_max_body_bytes() -> usize {
    1024 * 1024
}
fn default_cors() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local list, discarded at exit.
    #[default]
    Memory,
    /// Embedded SQLite table.
    Sqlite,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,

    /// SQLite database path; `:memory:` keeps it in-process.
    #[serde(default = "default_store_path")]
    pub path: String,

    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
            seed: default_seed(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.backend == StoreBackend::Sqlite && self.path.is_empty() {
            return Err(TodoError::Validation(
                "store.path must not be empty for the sqlite backend".into(),
            ));
        }
        Ok(())
    }
}

fn default_store_path() -> String {
    ":memory:".into()
}
fn default_seed() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".into()
}
