//! Supabase GoTrue client.
//!
//! Thin HTTP wrapper for `/auth/v1/signup`, `/auth/v1/token` and
//! `/auth/v1/user`. Pure parsing in the `parse_*` functions for testability;
//! transport concerns stay in `SupabaseAuth`.

use std::time::Duration;

use super::types::{AuthError, AuthProvider, Session, SignUpOutcome};
use crate::config::AppConfig;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// CLIENT
// =============================================================================

/// Auth client bound to one Supabase project.
pub struct SupabaseAuth {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuth {
    /// Build a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &AppConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }
}

#[async_trait::async_trait]
impl AuthProvider for SupabaseAuth {
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError> {
        let response = self
            .http
            .get(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        parse_user_response(status, &body, access_token)
    }

    async fn sign_up(&self, email: &str, password: &str, redirect_to: &str) -> Result<SignUpOutcome, AuthError> {
        let response = self
            .http
            .post(self.endpoint("signup"))
            .query(&[("redirect_to", redirect_to)])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        parse_sign_up_response(status, &body)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .http
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        parse_sign_in_response(status, &body)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    user: Option<UserBody>,
}

#[derive(serde::Deserialize)]
struct UserBody {
    email: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_user_response(status: u16, body: &str, access_token: &str) -> Result<Option<Session>, AuthError> {
    match status {
        200 => {
            let user: UserBody = serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))?;
            Ok(Some(Session { access_token: access_token.to_string(), email: user.email }))
        }
        // Expired or forged token: no session, not an error.
        401 | 403 => Ok(None),
        _ => Err(AuthError::Response { status, body: body.to_string() }),
    }
}

fn parse_sign_up_response(status: u16, body: &str) -> Result<SignUpOutcome, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Response { status, body: body.to_string() });
    }

    // GoTrue returns either the bare user object (confirmation pending) or a
    // session object wrapping `user` (autoconfirm enabled).
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))?;
    let user_created = value.get("id").is_some() || value.get("user").map_or(false, |u| !u.is_null());
    Ok(SignUpOutcome { user_created })
}

fn parse_sign_in_response(status: u16, body: &str) -> Result<Session, AuthError> {
    match status {
        200 => {
            let token: TokenResponse = serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))?;
            Ok(Session {
                access_token: token.access_token,
                email: token.user.and_then(|u| u.email),
            })
        }
        400 | 401 | 422 => Err(AuthError::InvalidCredentials),
        _ => Err(AuthError::Response { status, body: body.to_string() }),
    }
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
