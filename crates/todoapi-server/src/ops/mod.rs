//! Fixed HTTP endpoints.
//!
//! - `/`        : greeting
//! - `/metrics` : Prometheus text format

use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}};

use crate::app_state::AppState;
use crate::obs::metrics::CONTENT_TYPE;

pub async fn hello() -> impl IntoResponse {
    (StatusCode::OK, "Hello World")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, CONTENT_TYPE)],
        body,
    )
        .into_response()
}
