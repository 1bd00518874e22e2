//! Request span middleware for correlating logs with requests.
//!
//! Generates a UUID v4 for each incoming request and wraps the request
//! lifecycle in a tracing span carrying the request ID, method, and path.
//! Completion is logged with the response status and duration.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that assigns a request ID and spans the whole request.
///
/// Layered outermost so the span covers routing and the response-header
/// layer as well as the handler itself.
pub async fn request_span_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await
}
