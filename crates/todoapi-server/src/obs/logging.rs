//! Per-request logging middleware.
//!
//! Every request is logged on arrival (method, url, body) and on completion
//! (status, elapsed seconds). Slow completions add a warning, and failures
//! recorded by [`ApiError`] are logged at error level before the response
//! leaves the process. Completed requests also feed [`ApiMetrics`].
//!
//! [`ApiMetrics`]: crate::obs::ApiMetrics

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http_body_util::LengthLimitError;

use todoapi_core::error::ClientCode;
use todoapi_core::TodoError;

use crate::app_state::AppState;
use crate::error::{ApiError, FailureLog};

/// Structured log sink for the request pipeline. Emission is best-effort.
#[derive(Debug, Clone)]
pub struct RequestLogger {
    slow_threshold: Duration,
}

impl RequestLogger {
    pub fn new(slow_threshold: Duration) -> Self {
        Self { slow_threshold }
    }

    pub fn slow_threshold(&self) -> Duration {
        self.slow_threshold
    }

    pub fn request_start(&self, method: &str, url: &str, body: &str) {
        tracing::info!(%method, %url, body, "incoming request");
    }

    /// Log a completion; returns true when it crossed the slow threshold.
    pub fn request_end(&self, method: &str, url: &str, status: u16, elapsed: Duration) -> bool {
        tracing::info!(
            %method,
            %url,
            status,
            elapsed_s = elapsed.as_secs_f64(),
            "request completed"
        );
        let slow = elapsed > self.slow_threshold;
        if slow {
            self.warning(&format!(
                "slow response: {:.3}s for {} {}",
                elapsed.as_secs_f64(),
                method,
                url
            ));
        }
        slow
    }

    pub fn warning(&self, message: &str) {
        tracing::warn!("{message}");
    }

    pub fn error(&self, code: ClientCode, message: &str, details: Option<&str>) {
        let code = code.as_str();
        match details {
            Some(details) => tracing::error!(code, details, "{message}"),
            None => tracing::error!(code, "{message}"),
        }
    }
}

/// True when `err`, or anything in its source chain, is the body length cap.
fn is_length_limit(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut cur = Some(err);
    while let Some(e) = cur {
        if e.is::<LengthLimitError>() {
            return true;
        }
        cur = e.source();
    }
    false
}

/// Middleware: log, time and count every request.
pub async fn track_request(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().to_string();
    let url = req.uri().to_string();
    let path = req.uri().path().to_owned();
    let logger = state.logger();

    let (parts, body) = req.into_parts();
    let bytes: Bytes = match axum::body::to_bytes(body, state.cfg().server.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            logger.request_start(&method, &url, "<unread>");
            let err = if is_length_limit(&e) {
                TodoError::PayloadTooLarge
            } else {
                logger.warning(&format!("request body read failed: {e}"));
                TodoError::Validation("request body could not be read".into())
            };
            let resp = ApiError::from(err).into_response();
            return finish(&state, &method, &url, &path, started, resp);
        }
    };

    logger.request_start(&method, &url, &String::from_utf8_lossy(&bytes));

    let req = Request::from_parts(parts, Body::from(bytes));
    let resp = next.run(req).await;
    finish(&state, &method, &url, &path, started, resp)
}

fn finish(
    state: &AppState,
    method: &str,
    url: &str,
    path: &str,
    started: Instant,
    resp: Response,
) -> Response {
    let logger = state.logger();
    if let Some(failure) = resp.extensions().get::<FailureLog>() {
        logger.error(failure.code, &failure.message, failure.details.as_deref());
    }

    let elapsed = started.elapsed();
    logger.request_end(method, url, resp.status().as_u16(), elapsed);
    state.metrics().observe_request(method, path, elapsed);
    resp
}
