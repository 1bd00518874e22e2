//! Configuration loading and constants.
//!
//! Loads application configuration from environment variables and defines the
//! default for every knob. `AppConfig` is the root configuration struct; its
//! `Settings` section holds the greeting-facing values that request handlers
//! read, while `HttpConfig` and `LoggingConfig` cover the server bind address
//! and log output format.
//!
//! Every variable has a default and malformed values fall back to it, so
//! loading cannot fail. Environment access goes through an injectable lookup
//! function (`from_source`) so tests build configuration from plain maps
//! instead of mutating the process environment.

use std::env;

// =============================================================================
// Greeting Defaults
// =============================================================================

/// Default name interpolated into the greeting when `NOMBRE` is unset
pub const DEFAULT_NOMBRE: &str = "Usuario";

/// Default service title when `APP_NAME` is unset (startup log metadata only)
pub const DEFAULT_APP_NAME: &str = "Python Microservice";

/// Default service version when `APP_VERSION` is unset (startup log metadata only)
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Service identifier reported by `/health`; existing probes match on it
pub const SERVICE_NAME: &str = "python-microservice";

// =============================================================================
// HTTP Defaults
// =============================================================================

/// Default bind host; all interfaces, so the service is reachable in a container
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Cache-Control value applied to every response. Greetings reflect the
/// current process environment and probe results must never be served stale
/// by an intermediary.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "saludo=info";

/// Default log filter when the debug flag is enabled
pub const DEBUG_LOG_FILTER: &str = "saludo=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default log filter honoring the debug flag. CLI and `RUST_LOG` overrides
/// take priority over this value.
pub fn default_log_filter(debug: bool) -> &'static str {
    if debug {
        DEBUG_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Root application configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Greeting settings read by request handlers
    pub settings: Settings,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// A `.env` file is honored when present; real environment variables win
    /// over it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_source(&|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_source(get: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            http: HttpConfig::from_source(get),
            settings: Settings::from_source(get),
            logging: LoggingConfig::from_source(get),
        }
    }
}

/// Greeting settings loaded from environment variables.
///
/// Immutable after construction and built exactly once at startup; handlers
/// read it through [`crate::state::AppState`]. Tests construct their own
/// values per scenario.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Name interpolated into the greeting (`NOMBRE`)
    pub nombre: String,
    /// Service title (`APP_NAME`), surfaced in the startup log
    pub app_name: String,
    /// Service version (`APP_VERSION`), surfaced in the startup log
    pub version: String,
    /// Debug flag (`DEBUG`); selects the verbose default log filter
    pub debug: bool,
}

impl Settings {
    /// Build settings from a variable source, applying defaults for anything
    /// absent. The debug flag is true only for a case-insensitive `"true"`;
    /// every other value (including absent) is false.
    pub fn from_source(get: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            nombre: get("NOMBRE").unwrap_or_else(|| DEFAULT_NOMBRE.to_string()),
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            version: get("APP_VERSION").unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
            debug: get("DEBUG").is_some_and(|v| v.eq_ignore_ascii_case("true")),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_source(&|_| None)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    /// Build the bind configuration from a variable source. An unparseable
    /// `HTTP_PORT` falls back to the default rather than failing.
    pub fn from_source(get: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: get("HTTP_HOST").unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string()),
            port: get("HTTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
        }
    }

    /// Bind address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::from_source(&|_| None)
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
}

impl LoggingConfig {
    pub fn from_source(get: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            format: get("LOG_FORMAT").unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string()),
        }
    }

    /// True when structured JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::from_source(&|_| None)
    }
}
