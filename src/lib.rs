//! Saludo: a minimal greeting microservice.
//!
//! Exposes two JSON endpoints: a greeting built from the environment-supplied
//! name at `/`, and a constant liveness/readiness probe at `/health`.
//! Configuration is read once from the environment at startup and shared
//! read-only with the handlers.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
