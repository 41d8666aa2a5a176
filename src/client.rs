//! Gateway Client
//!
//! Proxies JSON requests to the upstream API, attaching the current bearer
//! token to every outbound call.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::auth::{JwtTokenManager, TokenAuthenticator};
use crate::core::{HttpRequest, HttpResponse, HttpTransport, ReqwestHttpTransport};
use crate::error::{upstream_error_from_status, GatewayError, GatewayResult, ProtocolError};
use crate::services::{CategoriesService, ProductsService};
use crate::types::{HttpClientSettings, RestApiSettings};

/// Client for the upstream storefront API.
///
/// Every request goes through the token authenticator first; a token
/// acquisition failure propagates to the caller, while an empty token simply
/// forwards the request unauthenticated and lets the upstream reject it.
pub struct GatewayClient<
    T: HttpTransport = ReqwestHttpTransport,
    A: TokenAuthenticator = JwtTokenManager<ReqwestHttpTransport>,
> {
    settings: RestApiSettings,
    http_settings: HttpClientSettings,
    transport: Arc<T>,
    authenticator: Arc<A>,
}

impl GatewayClient<ReqwestHttpTransport, JwtTokenManager<ReqwestHttpTransport>> {
    /// Create a client with the default transport and token manager.
    pub fn new(settings: RestApiSettings) -> Result<Self, GatewayError> {
        Self::with_http_settings(settings, HttpClientSettings::default())
    }

    /// Create a client with custom HTTP settings.
    pub fn with_http_settings(
        settings: RestApiSettings,
        http_settings: HttpClientSettings,
    ) -> Result<Self, GatewayError> {
        let transport = Arc::new(ReqwestHttpTransport::with_timeout(http_settings.timeout)?);
        let authenticator = Arc::new(JwtTokenManager::new(
            settings.clone(),
            Arc::clone(&transport),
        ));

        Ok(Self {
            settings,
            http_settings,
            transport,
            authenticator,
        })
    }
}

impl<T: HttpTransport, A: TokenAuthenticator> GatewayClient<T, A> {
    /// Create a client with custom components.
    pub fn with_components(
        settings: RestApiSettings,
        http_settings: HttpClientSettings,
        transport: Arc<T>,
        authenticator: Arc<A>,
    ) -> Self {
        Self {
            settings,
            http_settings,
            transport,
            authenticator,
        }
    }

    /// Get the API settings.
    pub fn settings(&self) -> &RestApiSettings {
        &self.settings
    }

    /// Products operations.
    pub fn products(&self) -> ProductsService<'_, T, A> {
        ProductsService::new(self)
    }

    /// Categories operations.
    pub fn categories(&self) -> CategoriesService<'_, T, A> {
        CategoriesService::new(self)
    }

    /// GET an upstream resource and deserialize its JSON body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> GatewayResult<R> {
        let request = HttpRequest::get(self.settings.upstream_url(path));
        let response = self.execute(path, request).await?;
        decode_json(&response)
    }

    /// POST a JSON body to an upstream resource and deserialize the reply.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<R> {
        let body = serde_json::to_string(body).map_err(|e| {
            GatewayError::Protocol(ProtocolError::InvalidJson {
                message: e.to_string(),
            })
        })?;
        let request = HttpRequest::post_json(self.settings.upstream_url(path), body);
        let response = self.execute(path, request).await?;
        decode_json(&response)
    }

    /// Attach the bearer token, send, and log the round trip.
    async fn execute(&self, path: &str, mut request: HttpRequest) -> GatewayResult<HttpResponse> {
        let token = self.authenticator.get_access_token().await?;
        if !token.is_empty() {
            request = request.with_header("authorization", format!("Bearer {token}"));
        }
        request.timeout = Some(self.http_settings.timeout);

        let method = request.method;
        let started = Instant::now();
        let response = self.transport.send(request).await?;

        info!(
            method = method.as_str(),
            path,
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "proxied upstream request"
        );

        if !response.is_success() {
            return Err(upstream_error_from_status(response.status, path));
        }
        Ok(response)
    }
}

fn decode_json<R: DeserializeOwned>(response: &HttpResponse) -> GatewayResult<R> {
    serde_json::from_str(&response.body).map_err(|e| {
        GatewayError::Protocol(ProtocolError::InvalidJson {
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockTokenAuthenticator;
    use crate::core::MockHttpTransport;
    use crate::error::{AuthError, UpstreamError};
    use crate::types::Product;
    use secrecy::SecretString;

    fn settings() -> RestApiSettings {
        RestApiSettings {
            base_url: "https://api.example.com".to_string(),
            auth_path: "/auth/login".to_string(),
            username: "user@example.com".to_string(),
            password: SecretString::new("pass".to_string()),
            products_path: "/products".to_string(),
            categories_path: "/categories".to_string(),
        }
    }

    fn client(
        transport: Arc<MockHttpTransport>,
        authenticator: Arc<MockTokenAuthenticator>,
    ) -> GatewayClient<MockHttpTransport, MockTokenAuthenticator> {
        GatewayClient::with_components(
            settings(),
            HttpClientSettings::default(),
            transport,
            authenticator,
        )
    }

    #[tokio::test]
    async fn test_bearer_header_attached() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_json_response(200, &serde_json::json!({"title": "Chair"}));
        let authenticator = Arc::new(MockTokenAuthenticator::with_token("jwt-token"));

        let client = client(transport.clone(), authenticator.clone());
        let _: Product = client.get_json("/products/1").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://api.example.com/products/1");
        assert_eq!(
            request.headers.get("authorization").map(String::as_str),
            Some("Bearer jwt-token")
        );
        assert_eq!(authenticator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_token_forwards_without_header() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_json_response(200, &serde_json::json!({"title": "Chair"}));
        let authenticator = Arc::new(MockTokenAuthenticator::new());

        let client = client(transport.clone(), authenticator);
        let _: Product = client.get_json("/products/1").await.unwrap();

        let request = transport.last_request().unwrap();
        assert!(!request.headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_auth_failure_propagates_without_sending() {
        let transport = Arc::new(MockHttpTransport::new());
        let authenticator = Arc::new(MockTokenAuthenticator::new());
        authenticator.set_next_error(GatewayError::Auth(AuthError::NoToken));

        let client = client(transport.clone(), authenticator);
        let result: GatewayResult<Product> = client.get_json("/products/1").await;

        assert!(matches!(result, Err(GatewayError::Auth(AuthError::NoToken))));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_404_maps_to_not_found() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_status(404);
        let authenticator = Arc::new(MockTokenAuthenticator::with_token("jwt-token"));

        let client = client(transport, authenticator);
        let result: GatewayResult<Product> = client.get_json("/products/99").await;

        assert!(matches!(
            result,
            Err(GatewayError::Upstream(UpstreamError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_undeserializable_body_is_protocol_error() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_json_response(200, &serde_json::json!([1, 2, 3]));
        let authenticator = Arc::new(MockTokenAuthenticator::with_token("jwt-token"));

        let client = client(transport, authenticator);
        let result: GatewayResult<Product> = client.get_json("/products/1").await;

        assert!(matches!(
            result,
            Err(GatewayError::Protocol(ProtocolError::InvalidJson { .. }))
        ));
    }

    #[tokio::test]
    async fn test_post_json_sends_serialized_body() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_json_response(201, &serde_json::json!({"id": 7, "title": "Desk"}));
        let authenticator = Arc::new(MockTokenAuthenticator::with_token("jwt-token"));

        let client = client(transport.clone(), authenticator);
        let created: Product = client
            .post_json(
                "/products",
                &Product {
                    title: "Desk".to_string(),
                    price: 120.0,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(created.id, Some(7));
        let request = transport.last_request().unwrap();
        assert!(request.body.as_deref().unwrap().contains("Desk"));
    }
}
