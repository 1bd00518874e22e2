//! Greeting endpoint handler.
//!
//! `GET /` returns the localized greeting built from the name the service was
//! configured with at startup.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// JSON body returned by the greeting endpoint.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: String,
    pub status: &'static str,
}

/// Greeting handler.
///
/// Always returns HTTP 200 with a message interpolating the configured name.
/// The output is deterministic for a given settings value and has no side
/// effects.
#[instrument(name = "greeting::greet", skip(state))]
pub async fn greet(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: format!(
            "¡Hola, {}! Bienvenido al microservicio.",
            state.settings.nombre
        ),
        status: "success",
    })
}
