//! Health check endpoint for container orchestration.
//!
//! Provides a liveness/readiness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, systemd, and load balancers to verify the
//! service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::SERVICE_NAME;

/// JSON body returned by the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Health check handler.
///
/// Returns a constant payload independent of configuration. This is a
/// liveness probe: it only checks that the process can respond to HTTP, so it
/// must not touch anything that can block or fail.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}
