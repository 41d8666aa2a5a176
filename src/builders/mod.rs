//! Fluent builders for gateway configuration.

mod config;

pub use config::{rest_api_settings, RestApiSettingsBuilder};
