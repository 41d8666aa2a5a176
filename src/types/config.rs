//! Configuration Types
//!
//! Settings for the upstream REST API and the identity provider it fronts.

use secrecy::SecretString;
use std::time::Duration;

/// Refresh endpoint path on the identity provider. Fixed by the provider's
/// API surface, unlike the configurable login path.
pub const REFRESH_TOKEN_PATH: &str = "/auth/refresh-token";

/// Upstream REST API settings, immutable for the process lifetime.
#[derive(Clone)]
pub struct RestApiSettings {
    /// Base URL of the upstream API and its identity provider.
    pub base_url: String,
    /// Login path, appended to the base URL.
    pub auth_path: String,
    /// Login identity.
    pub username: String,
    /// Login password.
    pub password: SecretString,
    /// Products collection path.
    pub products_path: String,
    /// Categories collection path.
    pub categories_path: String,
}

impl RestApiSettings {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Full login URL.
    pub fn login_url(&self) -> String {
        format!("{}{}", self.base(), self.auth_path)
    }

    /// Full refresh URL.
    pub fn refresh_url(&self) -> String {
        format!("{}{}", self.base(), REFRESH_TOKEN_PATH)
    }

    /// Full URL for an upstream resource path.
    pub fn upstream_url(&self, path: &str) -> String {
        format!("{}{}", self.base(), path)
    }
}

impl std::fmt::Debug for RestApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestApiSettings")
            .field("base_url", &self.base_url)
            .field("auth_path", &self.auth_path)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("products_path", &self.products_path)
            .field("categories_path", &self.categories_path)
            .finish()
    }
}

/// HTTP client settings.
#[derive(Clone, Debug)]
pub struct HttpClientSettings {
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}
