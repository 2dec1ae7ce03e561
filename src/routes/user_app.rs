//! Authenticated area routes.
//!
//! Every handler goes through `require_session`; an absent session or a
//! resolver failure redirects to the landing page before any content is
//! produced.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use super::{LANDING_PATH, guard};
use crate::pages;
use crate::state::AppState;

/// `GET /user-app` — dashboard inside the authenticated shell.
pub async fn dashboard(State(state): State<AppState>, jar: CookieJar) -> Response {
    let session = match guard::require_session(state.auth.as_ref(), &jar, LANDING_PATH).await {
        Ok(session) => session,
        Err(redirect) => return redirect.into_response(),
    };
    pages::shell::page(session.email.as_deref(), pages::shell::dashboard()).into_response()
}

/// `GET /user-app/{*path}` — nested section pages, same guard.
pub async fn section(State(state): State<AppState>, Path(path): Path<String>, jar: CookieJar) -> Response {
    let session = match guard::require_session(state.auth.as_ref(), &jar, LANDING_PATH).await {
        Ok(session) => session,
        Err(redirect) => return redirect.into_response(),
    };
    pages::shell::page(session.email.as_deref(), pages::shell::section(&path)).into_response()
}

#[cfg(test)]
#[path = "user_app_test.rs"]
mod tests;
