//! Auth Wire Types
//!
//! Request and response bodies exchanged with the identity provider.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    /// Login identity.
    pub email: String,
    /// Login password.
    pub password: String,
}

/// Refresh request body.
#[derive(Clone, Debug, Serialize)]
pub struct RefreshRequest {
    /// Current refresh token.
    #[serde(rename = "RefreshToken")]
    pub refresh_token: String,
}

/// Token response from the identity provider.
///
/// The provider is loose about field casing, so the known spellings are
/// accepted as aliases.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    /// Access token (a compact JWT).
    #[serde(
        rename = "Access_Token",
        alias = "access_token",
        alias = "accessToken",
        alias = "AccessToken",
        alias = "access_Token"
    )]
    pub access_token: String,
    /// Refresh token, absent from some provider replies.
    #[serde(
        default,
        rename = "RefreshToken",
        alias = "refresh_token",
        alias = "refreshToken",
        alias = "Refresh_Token"
    )]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_provider_casing() {
        let json = r#"{"Access_Token": "access", "RefreshToken": "refresh"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "access");
        assert_eq!(response.refresh_token, Some("refresh".to_string()));
    }

    #[test]
    fn test_token_response_snake_case() {
        let json = r#"{"access_token": "access", "refresh_token": "refresh"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "access");
        assert_eq!(response.refresh_token, Some("refresh".to_string()));
    }

    #[test]
    fn test_token_response_missing_refresh_token() {
        let json = r#"{"Access_Token": "access"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.refresh_token, None);
    }

    #[test]
    fn test_token_response_missing_access_token_is_error() {
        let json = r#"{"RefreshToken": "refresh"}"#;
        assert!(serde_json::from_str::<TokenResponse>(json).is_err());
    }

    #[test]
    fn test_login_request_field_names() {
        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: "pass".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "user@example.com");
        assert_eq!(json["password"], "pass");
    }

    #[test]
    fn test_refresh_request_field_name() {
        let request = RefreshRequest {
            refresh_token: "refresh".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["RefreshToken"], "refresh");
    }
}
