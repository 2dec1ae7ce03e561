//! Application configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Configuration is loaded exactly once at startup into an immutable
//! `AppConfig` and passed explicitly to whatever needs it (router, auth
//! client). Missing or blank required values are fatal; the error names the
//! offending variable so operators can fix the deployment without reading
//! source.

pub const ENV_BASE_URL: &str = "BASE_URL";
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

const DEFAULT_PORT: u16 = 3000;

/// Errors raised while loading configuration. All are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("missing environment variable: {0}")]
    Missing(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Immutable application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Public base URL of this service, used for provider redirect targets.
    pub base_url: String,
    /// Supabase project URL (no trailing slash).
    pub supabase_url: String,
    /// Supabase anonymous (public) API key.
    pub supabase_anon_key: String,
    /// TCP port to bind.
    pub port: u16,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Required: `BASE_URL`, `SUPABASE_URL`, `SUPABASE_ANON_KEY`.
    /// Optional: `PORT` (default 3000), `COOKIE_SECURE` (default inferred
    /// from the `BASE_URL` scheme).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the first required variable that
    /// is unset or whitespace-only, or `ConfigError::Invalid` for an
    /// unparseable `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = required_var(ENV_BASE_URL)?;
        let supabase_url = required_var(ENV_SUPABASE_URL)?
            .trim_end_matches('/')
            .to_string();
        let supabase_anon_key = required_var(ENV_SUPABASE_ANON_KEY)?;

        let port = match std::env::var("PORT") {
            Err(_) => DEFAULT_PORT,
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
        };

        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or_else(|| base_url.starts_with("https://"));

        Ok(Self { base_url, supabase_url, supabase_anon_key, port, cookie_secure })
    }
}

/// Read a required variable, returning its trimmed value.
fn required_var(key: &'static str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => Ok(raw.trim().to_string()),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
