//! HTTP mapping for `TodoError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use todoapi_core::error::{ClientCode, TodoError};

/// Handler-level failure. Renders `{ "error": message }`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub TodoError);

/// Attached to error responses so the request middleware can log them.
#[derive(Debug, Clone)]
pub struct FailureLog {
    pub code: ClientCode,
    pub message: String,
    /// Backend detail, logged but never sent to the client.
    pub details: Option<String>,
}

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = status_for(code);
        let message = self.0.public_message();
        let details = match &self.0 {
            TodoError::Internal(d) => Some(d.clone()),
            _ => None,
        };

        let mut resp = (status, Json(json!({ "error": message }))).into_response();
        resp.extensions_mut().insert(FailureLog {
            code,
            message,
            details,
        });
        resp
    }
}
