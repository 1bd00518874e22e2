//! HTTP route handlers for the greeting service.
//!
//! Two flat routes: the greeting at `/` and the liveness probe at `/health`.
//! Both carry `Cache-Control: no-store` so an intermediary never serves a
//! stale greeting or, worse, a stale probe result. Unknown paths fall through
//! to axum's default 404 handling.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_span_layer;
use crate::state::AppState;

/// Creates the Axum router with both routes and response headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::greet))
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .with_state(state)
        // Request span middleware - outermost so the span wraps all request processing
        .layer(middleware::from_fn(request_span_layer))
}
