//! todoapi server library entry.
//!
//! Wires the config loader, todo stores, request logging, metrics and route
//! handlers into one axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
