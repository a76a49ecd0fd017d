//! Service config loader (strict parsing).

pub mod schema;

use std::{fs, path::Path};

use todoapi_core::error::{Result, TodoError};

pub use schema::{LogSection, ServerSection, StoreBackend, StoreSection, TodoApiConfig};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "TODOAPI_CONFIG";
/// Used when `TODOAPI_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "todoapi.yaml";

pub fn load_from_file(path: &str) -> Result<TodoApiConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TodoError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<TodoApiConfig> {
    let cfg: TodoApiConfig = serde_yaml::from_str(s)
        .map_err(|e| TodoError::Validation(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config for this process.
///
/// An explicit `TODOAPI_CONFIG` must exist; the default path is optional and
/// falls back to built-in defaults.
pub fn load_from_env() -> Result<TodoApiConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH),
        Err(_) => {
            let cfg = TodoApiConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }
}
