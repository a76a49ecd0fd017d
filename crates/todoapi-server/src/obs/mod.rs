//! Observability: Prometheus-compatible metrics and per-request logging.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler;
//! request logging runs as an axum middleware in front of every route.

pub mod logging;
pub mod metrics;

pub use logging::{track_request, RequestLogger};
pub use metrics::ApiMetrics;
