//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::Settings;

/// Shared application state, cheap to clone across handlers.
///
/// Holds the immutable settings snapshot constructed at startup. Handlers only
/// ever read it, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Creates application state from the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}
