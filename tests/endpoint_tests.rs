//! HTTP-level tests driving the real router.
//!
//! Requests go through `tower::ServiceExt::oneshot` against the same router
//! the binary serves, so routing, response headers, and JSON bodies are all
//! covered without binding a socket.

use axum::{
    body::Body,
    http::{header, response::Parts, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use saludo::config::{AppConfig, Settings};
use saludo::routes::create_router;
use saludo::state::AppState;

/// Build a router around the given settings, as `main` does at startup.
fn test_app(settings: Settings) -> Router {
    create_router(AppState::new(settings))
}

fn settings_with_nombre(nombre: &str) -> Settings {
    Settings {
        nombre: nombre.to_string(),
        ..Settings::default()
    }
}

async fn get_json(app: Router, uri: &str) -> (Parts, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (parts, json)
}

#[tokio::test]
async fn greeting_returns_the_configured_name() {
    let app = test_app(settings_with_nombre("TestUser"));

    let (parts, json) = get_json(app, "/").await;

    assert_eq!(parts.status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "¡Hola, TestUser! Bienvenido al microservicio.");
}

#[tokio::test]
async fn greeting_defaults_to_usuario() {
    let app = test_app(Settings::default());

    let (parts, json) = get_json(app, "/").await;

    assert_eq!(parts.status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Usuario"), "got {:?}", message);
    assert_eq!(message, "¡Hola, Usuario! Bienvenido al microservicio.");
}

#[tokio::test]
async fn greeting_literal_is_correctly_encoded() {
    // Guards against a double-encoded literal ("Â¡Hola") sneaking in.
    let app = test_app(Settings::default());

    let (_, json) = get_json(app, "/").await;

    let message = json["message"].as_str().unwrap();
    assert!(message.starts_with("¡Hola"), "got {:?}", message);
    assert!(!message.contains('Â'), "got mojibake in {:?}", message);
}

#[tokio::test]
async fn greeting_reflects_the_environment_source() {
    // End to end through the configuration loader, without touching the
    // process environment.
    let config = AppConfig::from_source(&|key| match key {
        "NOMBRE" => Some("Lucía".to_string()),
        _ => None,
    });
    let app = test_app(config.settings);

    let (parts, json) = get_json(app, "/").await;

    assert_eq!(parts.status, StatusCode::OK);
    assert_eq!(json["message"], "¡Hola, Lucía! Bienvenido al microservicio.");
}

#[tokio::test]
async fn health_payload_is_constant_regardless_of_settings() {
    let settings = Settings {
        nombre: "TestUser".to_string(),
        app_name: "Something Else".to_string(),
        version: "9.9.9".to_string(),
        debug: true,
    };
    let app = test_app(settings);

    let (parts, body) = get_json(app, "/health").await;

    assert_eq!(parts.status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "healthy", "service": "python-microservice"})
    );
}

#[tokio::test]
async fn repeated_greetings_are_identical() {
    let app = test_app(settings_with_nombre("TestUser"));

    let first = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let second = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(first.status(), second.status());
    let first_bytes = axum::body::to_bytes(first.into_body(), usize::MAX)
        .await
        .unwrap();
    let second_bytes = axum::body::to_bytes(second.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[tokio::test]
async fn responses_are_json_and_never_cached() {
    for uri in ["/", "/health"] {
        let app = test_app(Settings::default());
        let (parts, _) = get_json(app, uri).await;

        assert_eq!(parts.status, StatusCode::OK);
        assert_eq!(parts.headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(parts.headers[header::CACHE_CONTROL], "no-store");
    }
}

#[tokio::test]
async fn unknown_path_falls_through_to_404() {
    let app = test_app(Settings::default());

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
