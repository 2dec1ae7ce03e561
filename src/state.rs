//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the immutable configuration and the auth provider behind a trait
//! object so handlers stay testable with a mock provider. No mutable state
//! crosses requests; the only cross-request artifact is the session cookie.

use std::sync::Arc;

use crate::auth::AuthProvider;
use crate::config::AppConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, auth: Arc<dyn AuthProvider>) -> Self {
        Self { config: Arc::new(config), auth }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
