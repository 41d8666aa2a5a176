//! Configuration Builder
//!
//! Fluent builder for upstream API settings.

use secrecy::SecretString;
use url::Url;

use crate::error::{ConfigurationError, GatewayError};
use crate::types::RestApiSettings;

/// Builder for [`RestApiSettings`].
#[derive(Default)]
pub struct RestApiSettingsBuilder {
    base_url: Option<String>,
    auth_path: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    products_path: String,
    categories_path: String,
}

impl RestApiSettingsBuilder {
    /// Create new settings builder.
    pub fn new() -> Self {
        Self {
            products_path: "/products".to_string(),
            categories_path: "/categories".to_string(),
            ..Default::default()
        }
    }

    /// Set the upstream base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the login path.
    pub fn auth_path(mut self, auth_path: impl Into<String>) -> Self {
        self.auth_path = Some(auth_path.into());
        self
    }

    /// Set the login username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the login password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Override the products collection path.
    pub fn products_path(mut self, path: impl Into<String>) -> Self {
        self.products_path = path.into();
        self
    }

    /// Override the categories collection path.
    pub fn categories_path(mut self, path: impl Into<String>) -> Self {
        self.categories_path = path.into();
        self
    }

    /// Build the settings, validating required fields.
    pub fn build(self) -> Result<RestApiSettings, GatewayError> {
        let base_url = self.base_url.ok_or_else(|| missing("base_url"))?;
        if Url::parse(&base_url).is_err() {
            return Err(GatewayError::Configuration(
                ConfigurationError::InvalidEndpoint { url: base_url },
            ));
        }

        let auth_path = self.auth_path.ok_or_else(|| missing("auth_path"))?;
        if !auth_path.starts_with('/') {
            return Err(GatewayError::Configuration(
                ConfigurationError::InvalidConfig {
                    message: format!("auth_path must start with '/': {auth_path}"),
                },
            ));
        }

        Ok(RestApiSettings {
            base_url,
            auth_path,
            username: self.username.ok_or_else(|| missing("username"))?,
            password: self.password.ok_or_else(|| missing("password"))?,
            products_path: self.products_path,
            categories_path: self.categories_path,
        })
    }
}

fn missing(field: &str) -> GatewayError {
    GatewayError::Configuration(ConfigurationError::MissingRequired {
        field: field.to_string(),
    })
}

/// Create a new settings builder.
pub fn rest_api_settings() -> RestApiSettingsBuilder {
    RestApiSettingsBuilder::new()
}
