//! Auth types — provider-neutral session and account types.
//!
//! The session token is opaque: this codebase stores it in a cookie and hands
//! it back to the provider, never inspecting or decoding its contents.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by auth provider operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The HTTP request to the provider failed (network, timeout, TLS).
    #[error("auth request failed: {0}")]
    Request(String),

    /// The provider returned a non-success HTTP status.
    #[error("auth response error: status {status}")]
    Response { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("auth response parse failed: {0}")]
    Parse(String),

    /// The provider rejected the supplied credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// SESSION
// =============================================================================

/// An active provider-issued session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque access token, exactly as issued by the provider.
    pub access_token: String,
    /// Account email as reported by the provider, for display only.
    pub email: Option<String>,
}

/// Result of an account-creation call.
///
/// Providers that require email confirmation return the created user without
/// a session, so sign-up never yields a token here.
#[derive(Debug, Clone, Copy)]
pub struct SignUpOutcome {
    /// Whether the provider reported a created user.
    pub user_created: bool,
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Capability interface for the external auth provider.
///
/// UI routes depend only on this trait; the concrete backend is chosen at
/// startup. Mirrors the provider contract: `getSession`, `signUp`,
/// `signInWithPassword`.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Validate an access token, returning the session if it is active.
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError>;

    /// Create an account. `redirect_to` is where the provider sends the user
    /// after email verification.
    async fn sign_up(&self, email: &str, password: &str, redirect_to: &str) -> Result<SignUpOutcome, AuthError>;

    /// Authenticate with email and password, returning a fresh session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
}
