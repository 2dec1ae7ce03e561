//! Session cookie plumbing and route guards.
//!
//! DESIGN
//! ======
//! Both server-side checks go through the same two guards, parameterized by
//! redirect target, so the landing page and the authenticated layout cannot
//! drift apart. Failure handling is asymmetric on purpose:
//!
//! * `require_no_session` (public landing) treats a resolver failure as "no
//!   session" and renders the public page — a provider outage must never
//!   block the login form.
//! * `require_session` (authenticated layout) treats a resolver failure as
//!   "redirect to landing" — an outage must never grant access.

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::auth::{AuthError, AuthProvider, Session};

/// Cookie holding the provider-issued access token, verbatim.
pub const SESSION_COOKIE: &str = "sb-access-token";

// =============================================================================
// COOKIES
// =============================================================================

/// Build the session cookie for a freshly issued token.
#[must_use]
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Build an expired session cookie that clears the stored token.
#[must_use]
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Ask the provider whether the request carries an active session.
///
/// The token is treated as opaque: read from the cookie, handed to the
/// provider, never interpreted locally. No cookie means no session without a
/// provider round-trip.
///
/// # Errors
///
/// Propagates provider errors; callers decide whether that means "no
/// session" or "redirect".
pub async fn resolve_session(auth: &dyn AuthProvider, jar: &CookieJar) -> Result<Option<Session>, AuthError> {
    let token = jar.get(SESSION_COOKIE).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return Ok(None);
    }
    auth.get_session(token).await
}

// =============================================================================
// GUARDS
// =============================================================================

/// Guard for authenticated pages: yield the session or redirect away.
///
/// Resolver failure redirects too — failing open here would grant access
/// without a valid session.
pub async fn require_session(
    auth: &dyn AuthProvider,
    jar: &CookieJar,
    redirect_to: &str,
) -> Result<Session, Redirect> {
    match resolve_session(auth, jar).await {
        Ok(Some(session)) => Ok(session),
        Ok(None) => Err(Redirect::to(redirect_to)),
        Err(error) => {
            tracing::warn!(%error, "session resolution failed; denying access");
            Err(Redirect::to(redirect_to))
        }
    }
}

/// Guard for the public landing page: redirect signed-in users away.
///
/// Resolver failure is logged and treated as "no session" so the public page
/// still renders during a provider outage.
pub async fn require_no_session(
    auth: &dyn AuthProvider,
    jar: &CookieJar,
    redirect_to: &str,
) -> Result<(), Redirect> {
    match resolve_session(auth, jar).await {
        Ok(Some(_)) => Err(Redirect::to(redirect_to)),
        Ok(None) => Ok(()),
        Err(error) => {
            tracing::warn!(%error, "session resolution failed; rendering public page");
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
