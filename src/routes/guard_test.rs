use axum::http::header::LOCATION;
use axum::response::IntoResponse;

use super::*;
use crate::state::test_helpers::{MockAuth, dummy_session};

fn jar_with_token(token: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(SESSION_COOKIE, token.to_string()))
}

fn redirect_target(redirect: Redirect) -> String {
    let response = redirect.into_response();
    response.headers()[LOCATION].to_str().unwrap().to_string()
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_attributes() {
    let cookie = session_cookie("tok".into(), true);
    assert_eq!(cookie.name(), SESSION_COOKIE);
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// resolve_session
// =============================================================================

#[tokio::test]
async fn resolve_without_cookie_skips_provider() {
    let auth = MockAuth::default();
    let result = resolve_session(&auth, &CookieJar::new()).await.unwrap();
    assert!(result.is_none());
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn resolve_with_empty_cookie_skips_provider() {
    let auth = MockAuth::default();
    let result = resolve_session(&auth, &jar_with_token("")).await.unwrap();
    assert!(result.is_none());
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn resolve_with_cookie_asks_provider() {
    let auth = MockAuth { session: Some(dummy_session()), ..MockAuth::default() };
    let result = resolve_session(&auth, &jar_with_token("tok")).await.unwrap();
    assert!(result.is_some());
    assert_eq!(*auth.calls.lock().unwrap(), vec!["get_session"]);
}

// =============================================================================
// require_session — authenticated layout
// =============================================================================

#[tokio::test]
async fn require_session_passes_through_active_session() {
    let auth = MockAuth { session: Some(dummy_session()), ..MockAuth::default() };
    let session = require_session(&auth, &jar_with_token("tok"), "/").await.unwrap();
    assert_eq!(session.access_token, "tok-test-123");
}

#[tokio::test]
async fn require_session_redirects_without_session() {
    let auth = MockAuth::default();
    let redirect = require_session(&auth, &CookieJar::new(), "/").await.unwrap_err();
    assert_eq!(redirect_target(redirect), "/");
}

#[tokio::test]
async fn require_session_redirects_on_resolver_failure() {
    let auth = MockAuth { fail_get_session: true, ..MockAuth::default() };
    let redirect = require_session(&auth, &jar_with_token("tok"), "/").await.unwrap_err();
    assert_eq!(redirect_target(redirect), "/");
}

// =============================================================================
// require_no_session — public landing
// =============================================================================

#[tokio::test]
async fn require_no_session_allows_anonymous() {
    let auth = MockAuth::default();
    assert!(require_no_session(&auth, &CookieJar::new(), "/user-app").await.is_ok());
}

#[tokio::test]
async fn require_no_session_redirects_signed_in_users() {
    let auth = MockAuth { session: Some(dummy_session()), ..MockAuth::default() };
    let redirect = require_no_session(&auth, &jar_with_token("tok"), "/user-app").await.unwrap_err();
    assert_eq!(redirect_target(redirect), "/user-app");
}

#[tokio::test]
async fn require_no_session_fails_open_to_public_on_resolver_failure() {
    let auth = MockAuth { fail_get_session: true, ..MockAuth::default() };
    assert!(require_no_session(&auth, &jar_with_token("tok"), "/user-app").await.is_ok());
}
