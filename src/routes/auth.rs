//! Sign-up, sign-in and sign-out form handlers.
//!
//! Validation runs before any provider call; a failed check re-renders the
//! form with field messages and never reaches the network. Provider failures
//! surface as generic notices — the underlying error is logged, not shown.

use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::{LANDING_PATH, guard};
use crate::pages;
use crate::pages::landing::{LandingProps, Notice, Tab};
use crate::state::AppState;
use crate::validate;

pub const MSG_SIGN_UP_SUCCESS: &str = "Conta criada com sucesso! Você já pode fazer login no sistema.";
pub const MSG_SIGN_UP_ERROR: &str = "Erro ao criar conta. Verifique os dados informados e tente novamente.";
pub const MSG_SIGN_IN_ERROR: &str = "Erro ao fazer login. Verifique suas credenciais e tente novamente.";

// =============================================================================
// SIGN-UP
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /auth/sign-up` — validate, create the account, re-render the
/// landing page with the outcome.
pub async fn sign_up(State(state): State<AppState>, Form(form): Form<SignUpForm>) -> Response {
    let errors = validate::validate_sign_up(&form.name, &form.email, &form.password);
    if !errors.is_empty() {
        let mut props = LandingProps::new(Tab::SignUp);
        props.signup.name = form.name;
        props.signup.email = form.email;
        props.signup.errors = errors;
        return pages::landing::page(&props).into_response();
    }

    let redirect_to = format!("{}/auth/callback", state.config.base_url);
    match state.auth.sign_up(&form.email, &form.password, &redirect_to).await {
        Ok(outcome) => {
            // Created user: land on the login tab, mirroring the original
            // post-registration navigation. Either way the form is cleared
            // and the success notice shown.
            let tab = if outcome.user_created { Tab::Login } else { Tab::SignUp };
            let mut props = LandingProps::new(tab);
            let notice = Some(Notice { success: true, message: MSG_SIGN_UP_SUCCESS });
            match tab {
                Tab::Login => props.login.notice = notice,
                Tab::SignUp => props.signup.notice = notice,
            }
            pages::landing::page(&props).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "sign-up failed");
            let mut props = LandingProps::new(Tab::SignUp);
            props.signup.name = form.name;
            props.signup.email = form.email;
            props.signup.notice = Some(Notice { success: false, message: MSG_SIGN_UP_ERROR });
            pages::landing::page(&props).into_response()
        }
    }
}

// =============================================================================
// SIGN-IN
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /auth/sign-in` — validate, authenticate, set the session cookie and
/// bounce through `/` so the landing guard forwards to the authenticated
/// area.
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Form(form): Form<SignInForm>) -> Response {
    let errors = validate::validate_sign_in(&form.email, &form.password);
    if !errors.is_empty() {
        let mut props = LandingProps::new(Tab::Login);
        props.login.email = form.email;
        props.login.errors = errors;
        return pages::landing::page(&props).into_response();
    }

    match state.auth.sign_in(&form.email, &form.password).await {
        Ok(session) => {
            let cookie = guard::session_cookie(session.access_token, state.config.cookie_secure);
            (jar.add(cookie), Redirect::to(LANDING_PATH)).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "sign-in failed");
            let mut props = LandingProps::new(Tab::Login);
            props.login.email = form.email;
            props.login.notice = Some(Notice { success: false, message: MSG_SIGN_IN_ERROR });
            pages::landing::page(&props).into_response()
        }
    }
}

// =============================================================================
// SIGN-OUT
// =============================================================================

/// `POST /auth/sign-out` — clear the session cookie, back to the landing
/// page.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> Response {
    let jar = jar.add(guard::clear_session_cookie(state.config.cookie_secure));
    (jar, Redirect::to(LANDING_PATH)).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
