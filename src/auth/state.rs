//! Token Store
//!
//! Lock-protected holder for the current access token, refresh token, and
//! access-token expiry.

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

#[derive(Clone, Debug)]
struct TokenState {
    access_token: Option<String>,
    refresh_token: Option<String>,
    access_token_expiry: DateTime<Utc>,
}

impl Default for TokenState {
    fn default() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            // Expired sentinel: a store without a committed token never
            // serves from cache.
            access_token_expiry: DateTime::UNIX_EPOCH,
        }
    }
}

/// Synchronized token state.
///
/// The lock guards short read/write sections only; network calls run with the
/// lock released. The three fields always change together through
/// [`TokenStore::commit`], so readers never observe an access token paired
/// with a stale expiry.
#[derive(Default)]
pub struct TokenStore {
    state: Mutex<TokenState>,
}

impl TokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached access token if it stays valid for at least
    /// `min_validity` from now.
    pub fn valid_access_token(&self, min_validity: Duration) -> Option<String> {
        let state = self.state.lock().unwrap();
        match &state.access_token {
            Some(token)
                if !token.is_empty() && state.access_token_expiry > Utc::now() + min_validity =>
            {
                Some(token.clone())
            }
            _ => None,
        }
    }

    /// Get the access token regardless of expiry.
    pub fn access_token(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.access_token.clone().filter(|t| !t.is_empty())
    }

    /// Get the refresh token.
    pub fn refresh_token(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.refresh_token.clone().filter(|t| !t.is_empty())
    }

    /// Replace the whole state atomically.
    pub fn commit(
        &self,
        access_token: String,
        refresh_token: Option<String>,
        access_token_expiry: DateTime<Utc>,
    ) {
        let mut state = self.state.lock().unwrap();
        *state = TokenState {
            access_token: Some(access_token),
            refresh_token,
            access_token_expiry,
        };
    }
}
