//! Gateway Error Types
//!
//! Error hierarchy for token acquisition and proxied upstream calls.

use std::time::Duration;
use thiserror::Error;

/// Root error type for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

impl GatewayError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "GATEWAY_CONFIG",
            Self::Auth(_) => "GATEWAY_AUTH",
            Self::Network(_) => "GATEWAY_NETWORK",
            Self::Protocol(_) => "GATEWAY_PROTOCOL",
            Self::Upstream(_) => "GATEWAY_UPSTREAM",
        }
    }

    /// Check if the error means token acquisition itself failed, as opposed
    /// to the proxied upstream call.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid endpoint URL: {url}")]
    InvalidEndpoint { url: String },
}

/// Token acquisition error.
///
/// Surfaced when the identity provider reply could not be turned into a
/// usable access token. Expiry-claim problems never appear here; they degrade
/// into a short cache lifetime instead.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("no token obtained")]
    NoToken,

    #[error("login rejected with HTTP {status}")]
    LoginRejected { status: u16 },

    #[error("malformed token response: {message}")]
    MalformedTokenResponse { message: String },
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timeout after {timeout:?}")]
    Timeout { timeout: Duration },
}

/// Response parsing error.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

/// Error reported by the proxied upstream API.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Upstream rejected request with HTTP {status}")]
    RequestRejected { status: u16 },

    #[error("Upstream server error: HTTP {status}")]
    ServerError { status: u16 },
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Map a non-success upstream status to an error.
pub fn upstream_error_from_status(status: u16, path: &str) -> GatewayError {
    let error = match status {
        404 => UpstreamError::NotFound {
            path: path.to_string(),
        },
        400..=499 => UpstreamError::RequestRejected { status },
        _ => UpstreamError::ServerError { status },
    };
    GatewayError::Upstream(error)
}
