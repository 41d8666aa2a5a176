//! JWT token lifecycle management.
//!
//! Caches the access token obtained from the identity provider, refreshes it
//! near expiry, and falls back to a full login when the refresh token is no
//! longer honored.

pub mod claims;
pub mod manager;
pub mod state;

pub use manager::{JwtTokenManager, MockTokenAuthenticator, TokenAuthenticator};
pub use state::TokenStore;
