//! Token Lifecycle Manager
//!
//! Decides whether to serve a cached token, refresh it, or perform a fresh
//! login, and orchestrates the identity-provider calls.

use async_trait::async_trait;
use chrono::Duration;
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::auth::claims;
use crate::auth::state::TokenStore;
use crate::core::{HttpRequest, HttpTransport};
use crate::error::{AuthError, GatewayError, ProtocolError};
use crate::types::{LoginRequest, RefreshRequest, RestApiSettings, TokenResponse};

/// A cached token with less remaining validity than this is not served; the
/// caller refreshes or logs in instead.
pub const MIN_REMAINING_VALIDITY_SECS: i64 = 60;

/// Access-token source for outbound requests.
#[async_trait]
pub trait TokenAuthenticator: Send + Sync {
    /// Get a valid bearer token, logging in or refreshing as needed.
    async fn get_access_token(&self) -> Result<String, GatewayError>;
}

enum RefreshOutcome {
    Refreshed,
    NeedsLogin,
}

/// Token lifecycle manager backed by the identity provider's JWT login and
/// refresh endpoints.
///
/// Concurrent callers that all find the cache stale each perform their own
/// login or refresh; the store keeps whichever result lands last. The state
/// lock is never held across a network call, so callers can race or be
/// cancelled without observing partial updates, at the cost of occasional
/// redundant provider calls around expiry.
pub struct JwtTokenManager<T: HttpTransport> {
    settings: RestApiSettings,
    transport: Arc<T>,
    store: TokenStore,
}

impl<T: HttpTransport> JwtTokenManager<T> {
    /// Create a manager with an empty token store.
    pub fn new(settings: RestApiSettings, transport: Arc<T>) -> Self {
        Self {
            settings,
            transport,
            store: TokenStore::new(),
        }
    }

    async fn login(&self) -> Result<(), GatewayError> {
        let body = encode_body(&LoginRequest {
            email: self.settings.username.clone(),
            password: self.settings.password.expose_secret().to_string(),
        })?;

        let request = HttpRequest::post_json(self.settings.login_url(), body);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(GatewayError::Auth(AuthError::LoginRejected {
                status: response.status,
            }));
        }

        self.commit_token_response(&response.body)?;
        info!("login succeeded, new access token cached");
        Ok(())
    }

    /// Try the refresh endpoint. A rejected or unreachable refresh reports
    /// `NeedsLogin` instead of failing: an invalidated refresh token should
    /// stay invisible to callers as long as the credentials still work. A
    /// malformed body on a successful refresh is a hard failure, same as for
    /// login.
    async fn attempt_refresh(&self, refresh_token: String) -> Result<RefreshOutcome, GatewayError> {
        let body = encode_body(&RefreshRequest { refresh_token })?;
        let request = HttpRequest::post_json(self.settings.refresh_url(), body);

        match self.transport.send(request).await {
            Ok(response) if response.is_success() => {
                self.commit_token_response(&response.body)?;
                info!("token refresh succeeded");
                Ok(RefreshOutcome::Refreshed)
            }
            Ok(response) => {
                warn!(
                    status = response.status,
                    "token refresh rejected, falling back to login"
                );
                Ok(RefreshOutcome::NeedsLogin)
            }
            Err(error) => {
                warn!(%error, "token refresh unreachable, falling back to login");
                Ok(RefreshOutcome::NeedsLogin)
            }
        }
    }

    fn commit_token_response(&self, body: &str) -> Result<(), GatewayError> {
        let response: TokenResponse = serde_json::from_str(body).map_err(|e| {
            GatewayError::Auth(AuthError::MalformedTokenResponse {
                message: e.to_string(),
            })
        })?;

        let expiry = claims::token_expiry(&response.access_token);
        self.store
            .commit(response.access_token, response.refresh_token, expiry);
        Ok(())
    }
}

#[async_trait]
impl<T: HttpTransport> TokenAuthenticator for JwtTokenManager<T> {
    async fn get_access_token(&self) -> Result<String, GatewayError> {
        if let Some(token) = self
            .store
            .valid_access_token(Duration::seconds(MIN_REMAINING_VALIDITY_SECS))
        {
            debug!("serving cached access token");
            return Ok(token);
        }

        match self.store.refresh_token() {
            None => {
                info!("no refresh token known, performing login");
                self.login().await?;
            }
            Some(refresh_token) => {
                if let RefreshOutcome::NeedsLogin = self.attempt_refresh(refresh_token).await? {
                    self.login().await?;
                }
            }
        }

        self.store
            .access_token()
            .ok_or(GatewayError::Auth(AuthError::NoToken))
    }
}

fn encode_body<B: serde::Serialize>(body: &B) -> Result<String, GatewayError> {
    serde_json::to_string(body).map_err(|e| {
        GatewayError::Protocol(ProtocolError::InvalidJson {
            message: e.to_string(),
        })
    })
}

/// Mock authenticator for testing.
#[derive(Default)]
pub struct MockTokenAuthenticator {
    token: std::sync::Mutex<String>,
    next_error: std::sync::Mutex<Option<GatewayError>>,
    call_count: std::sync::Mutex<usize>,
}

impl MockTokenAuthenticator {
    /// Create a mock that returns an empty token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that returns a fixed token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: std::sync::Mutex::new(token.into()),
            ..Self::default()
        }
    }

    /// Set the token to return.
    pub fn set_token(&self, token: impl Into<String>) -> &Self {
        *self.token.lock().unwrap() = token.into();
        self
    }

    /// Fail the next acquisition with the given error.
    pub fn set_next_error(&self, error: GatewayError) -> &Self {
        *self.next_error.lock().unwrap() = Some(error);
        self
    }

    /// Number of acquisitions performed.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl TokenAuthenticator for MockTokenAuthenticator {
    async fn get_access_token(&self) -> Result<String, GatewayError> {
        *self.call_count.lock().unwrap() += 1;
        if let Some(error) = self.next_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self.token.lock().unwrap().clone())
    }
}
