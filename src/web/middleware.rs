//! HTTP middleware
//!
//! Request logging for every route and the per-client rate limit applied to
//! question submission.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{info, warn};

use super::{extractors::ClientKey, AppState};
use crate::errors::AppError;
use crate::services::RateDecision;

pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Logs each request with its status and timing
pub async fn request_logging_middleware(
    method: Method,
    uri: Uri,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration = start.elapsed();

    if status >= 400 {
        warn!(
            method = %method,
            uri = %uri,
            status = status,
            request_id = %request_id,
            duration_ms = duration.as_millis(),
            "HTTP request completed with error"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = status,
            request_id = %request_id,
            duration_ms = duration.as_millis(),
            "HTTP request completed"
        );
    }

    response
}

/// Rejects callers that exhausted their window before the handler runs
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    client: ClientKey,
    request: Request,
    next: Next,
) -> Response {
    match state.rate_limiter.check(client.as_str()).await {
        RateDecision::Allowed { remaining } => {
            let mut response = next.run(request).await;
            response
                .headers_mut()
                .insert(RATE_LIMIT_REMAINING_HEADER, HeaderValue::from(remaining));
            response
        }
        RateDecision::Limited { retry_after } => {
            // round up so clients never retry inside the window
            let retry_after_secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            warn!(
                client = %client.as_str(),
                uri = %request.uri(),
                retry_after_secs = retry_after_secs,
                "Rate limit exceeded"
            );
            AppError::RateLimited { retry_after_secs }.into_response()
        }
    }
}
