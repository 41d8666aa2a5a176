//! Gateway Types
//!
//! Configuration, auth wire DTOs, and catalog DTOs.

pub mod auth;
pub mod catalog;
pub mod config;

pub use auth::{LoginRequest, RefreshRequest, TokenResponse};
pub use catalog::{Category, Product};
pub use config::{HttpClientSettings, RestApiSettings, REFRESH_TOKEN_PATH};
