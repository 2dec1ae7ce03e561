//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One public landing route, three auth form endpoints, and the guarded
//! `/user-app` area, all server-rendered. Session gating happens in the
//! handlers via the shared guards; the router itself carries no auth logic.

pub mod auth;
pub mod guard;
pub mod landing;
pub mod user_app;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Public landing page.
pub const LANDING_PATH: &str = "/";
/// Root of the authenticated area.
pub const USER_APP_PATH: &str = "/user-app";

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing::landing))
        .route("/auth/sign-up", post(auth::sign_up))
        .route("/auth/sign-in", post(auth::sign_in))
        .route("/auth/sign-out", post(auth::sign_out))
        .route("/user-app", get(user_app::dashboard))
        .route("/user-app/{*path}", get(user_app::section))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
