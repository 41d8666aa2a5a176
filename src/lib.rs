//! Storefront Gateway
//!
//! Backend-for-frontend client for a storefront REST API. Each products or
//! categories operation is proxied to the upstream API with a bearer token
//! injected by a JWT token lifecycle manager: the manager caches the access
//! token, refreshes it near expiry with the refresh token, and falls back to
//! a full credential login when the refresh is rejected.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_gateway::{rest_api_settings, GatewayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = rest_api_settings()
//!         .base_url("https://api.example.com")
//!         .auth_path("/auth/login")
//!         .username("user@example.com")
//!         .password("secret")
//!         .build()?;
//!
//!     let client = GatewayClient::new(settings)?;
//!
//!     // First call logs in; later calls reuse the cached token until it
//!     // nears expiry.
//!     let products = client.products().get_products().await?;
//!     println!("{} products", products.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `types`: configuration, auth wire DTOs, catalog DTOs
//! - `error`: error hierarchy with typed auth failures
//! - `core`: HTTP transport trait with reqwest and mock implementations
//! - `auth`: token store, expiry-claim decoding, and the lifecycle manager
//! - `client`: bearer-injecting gateway client with JSON helpers
//! - `services`: typed product and category operations
//! - `builders`: fluent settings builder

pub mod auth;
pub mod builders;
pub mod client;
pub mod core;
pub mod error;
pub mod services;
pub mod types;

// Re-export main client
pub use client::GatewayClient;

// Re-export builders
pub use builders::{rest_api_settings, RestApiSettingsBuilder};

// Re-export errors
pub use error::{
    upstream_error_from_status, AuthError, ConfigurationError, GatewayError, GatewayResult,
    NetworkError, ProtocolError, UpstreamError,
};

// Re-export types
pub use types::{
    Category, HttpClientSettings, LoginRequest, Product, RefreshRequest, RestApiSettings,
    TokenResponse, REFRESH_TOKEN_PATH,
};

// Re-export core components
pub use core::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, MockHttpTransport, ReqwestHttpTransport,
};

// Re-export token management
pub use auth::{JwtTokenManager, MockTokenAuthenticator, TokenAuthenticator, TokenStore};

// Re-export services
pub use services::{CategoriesService, ProductsService};
