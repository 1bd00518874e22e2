//! Saludo: a minimal greeting microservice.
//!
//! This is the application entry point. It parses CLI arguments, loads
//! configuration from the environment, initializes tracing, builds the Axum
//! router, and starts the HTTP server with graceful shutdown.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saludo::config::{default_log_filter, AppConfig, LoggingConfig};
use saludo::http::start_server;
use saludo::routes::create_router;
use saludo::state::AppState;

/// Saludo: a minimal greeting microservice
#[derive(Parser, Debug)]
#[command(name = "saludo", version, about)]
struct Args {
    /// Bind host (overrides HTTP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides HTTP_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "saludo=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration, then apply overrides with priority: CLI > env > default
    let mut config = AppConfig::from_env();
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default (debug-flag aware)
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| default_log_filter(config.settings.debug).to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        app = %config.settings.app_name,
        version = %config.settings.version,
        nombre = %config.settings.nombre,
        debug = config.settings.debug,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.settings.clone());
    let app = create_router(state);

    // Start server (blocks until shutdown)
    start_server(app, &config.http).await?;

    Ok(())
}

/// Initialize the tracing subscriber in text or JSON format.
fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));
    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
