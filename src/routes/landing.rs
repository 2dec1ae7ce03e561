//! Public landing route.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::{USER_APP_PATH, guard};
use crate::pages;
use crate::pages::landing::{LandingProps, Notice, Tab};
use crate::state::AppState;

/// Placeholder notice for the not-yet-implemented password recovery flow.
pub const MSG_FORGOT_PASSWORD: &str = "Funcionalidade em desenvolvimento.";

#[derive(Debug, Deserialize)]
pub struct LandingQuery {
    tab: Option<String>,
    forgot: Option<String>,
}

/// `GET /` — login/sign-up tabs, or a redirect to the authenticated area
/// when a session is already active.
pub async fn landing(
    State(state): State<AppState>,
    Query(query): Query<LandingQuery>,
    jar: CookieJar,
) -> Response {
    if let Err(redirect) = guard::require_no_session(state.auth.as_ref(), &jar, USER_APP_PATH).await {
        return redirect.into_response();
    }

    let mut props = LandingProps::new(Tab::from_query(query.tab.as_deref()));
    if query.forgot.is_some() {
        props.login.notice = Some(Notice { success: false, message: MSG_FORGOT_PASSWORD });
    }
    pages::landing::page(&props).into_response()
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
